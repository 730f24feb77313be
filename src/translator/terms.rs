//! Built-in school-administration vocabulary.
//!
//! Every table declares the same terms in the same order: compounds first,
//! then the shorter terms they contain. Reordering a table changes what the
//! translator produces, so keep new terms above any term they contain.

pub(super) const BUILTIN: &[(&str, &[(&str, &str)])] = &[
    ("en", EN),
    ("zh-CN", ZH_CN),
    ("vi", VI),
    ("ru", RU),
];

const EN: &[(&str, &str)] = &[
    ("가정통신문", "School Notice"),
    ("방과후학교", "After-School Program"),
    ("초등학교", "Elementary School"),
    ("중학교", "Middle School"),
    ("고등학교", "High School"),
    ("여름방학", "Summer Vacation"),
    ("겨울방학", "Winter Vacation"),
    ("현장학습", "Field Trip"),
    ("수학여행", "School Trip"),
    ("운동회", "Sports Day"),
    ("입학식", "Entrance Ceremony"),
    ("졸업식", "Graduation Ceremony"),
    ("예방접종", "Vaccination"),
    ("건강검진", "Health Checkup"),
    ("돌봄교실", "After-School Care Class"),
    ("보건실", "Health Room"),
    ("학년도", "Academic Year"),
    ("신청서", "Application Form"),
    ("안내문", "Information Letter"),
    ("학부모", "Parents"),
    ("보호자", "Guardian"),
    ("선생님", "Teacher"),
    ("교장", "Principal"),
    ("교감", "Vice Principal"),
    ("담임", "Homeroom Teacher"),
    ("학생", "Student"),
    ("학기", "Semester"),
    ("학년", "Grade"),
    ("방학", "Vacation"),
    ("개학", "Beginning of Term"),
    ("입학", "Admission"),
    ("졸업", "Graduation"),
    ("급식", "School Meal"),
    ("운동장", "Playground"),
    ("교실", "Classroom"),
    ("강당", "Auditorium"),
    ("학교", "School"),
    ("안내", "Notice"),
    ("신청", "Application"),
    ("제출", "Submission"),
    ("기한", "Deadline"),
    ("일정", "Schedule"),
    ("장소", "Venue"),
    ("대상", "Eligibility"),
    ("준비물", "Items to Bring"),
    ("상담", "Counseling"),
    ("문의", "Inquiries"),
    ("결석", "Absence"),
    ("출석", "Attendance"),
];

const ZH_CN: &[(&str, &str)] = &[
    ("가정통신문", "家庭通知书"),
    ("방과후학교", "课后学校"),
    ("초등학교", "小学"),
    ("중학교", "初中"),
    ("고등학교", "高中"),
    ("여름방학", "暑假"),
    ("겨울방학", "寒假"),
    ("현장학습", "实地学习"),
    ("수학여행", "修学旅行"),
    ("운동회", "运动会"),
    ("입학식", "入学典礼"),
    ("졸업식", "毕业典礼"),
    ("예방접종", "预防接种"),
    ("건강검진", "健康检查"),
    ("돌봄교실", "托管教室"),
    ("보건실", "保健室"),
    ("학년도", "学年度"),
    ("신청서", "申请书"),
    ("안내문", "通知函"),
    ("학부모", "家长"),
    ("보호자", "监护人"),
    ("선생님", "老师"),
    ("교장", "校长"),
    ("교감", "副校长"),
    ("담임", "班主任"),
    ("학생", "学生"),
    ("학기", "学期"),
    ("학년", "年级"),
    ("방학", "假期"),
    ("개학", "开学"),
    ("입학", "入学"),
    ("졸업", "毕业"),
    ("급식", "供餐"),
    ("운동장", "操场"),
    ("교실", "教室"),
    ("강당", "礼堂"),
    ("학교", "学校"),
    ("안내", "通知"),
    ("신청", "申请"),
    ("제출", "提交"),
    ("기한", "期限"),
    ("일정", "日程"),
    ("장소", "地点"),
    ("대상", "对象"),
    ("준비물", "准备物品"),
    ("상담", "咨询"),
    ("문의", "询问"),
    ("결석", "缺席"),
    ("출석", "出席"),
];

const VI: &[(&str, &str)] = &[
    ("가정통신문", "Thông báo gửi phụ huynh"),
    ("방과후학교", "Chương trình sau giờ học"),
    ("초등학교", "Trường tiểu học"),
    ("중학교", "Trường trung học cơ sở"),
    ("고등학교", "Trường trung học phổ thông"),
    ("여름방학", "Kỳ nghỉ hè"),
    ("겨울방학", "Kỳ nghỉ đông"),
    ("현장학습", "Học tập thực tế"),
    ("수학여행", "Chuyến tham quan học tập"),
    ("운동회", "Hội thao"),
    ("입학식", "Lễ nhập học"),
    ("졸업식", "Lễ tốt nghiệp"),
    ("예방접종", "Tiêm phòng"),
    ("건강검진", "Khám sức khỏe"),
    ("돌봄교실", "Lớp trông giữ"),
    ("보건실", "Phòng y tế"),
    ("학년도", "Năm học"),
    ("신청서", "Đơn đăng ký"),
    ("안내문", "Thư thông báo"),
    ("학부모", "Phụ huynh"),
    ("보호자", "Người giám hộ"),
    ("선생님", "Thầy cô"),
    ("교장", "Hiệu trưởng"),
    ("교감", "Phó hiệu trưởng"),
    ("담임", "Giáo viên chủ nhiệm"),
    ("학생", "Học sinh"),
    ("학기", "Học kỳ"),
    ("학년", "Khối lớp"),
    ("방학", "Kỳ nghỉ"),
    ("개학", "Khai giảng"),
    ("입학", "Nhập học"),
    ("졸업", "Tốt nghiệp"),
    ("급식", "Bữa ăn học đường"),
    ("운동장", "Sân trường"),
    ("교실", "Phòng học"),
    ("강당", "Hội trường"),
    ("학교", "Trường học"),
    ("안내", "Thông báo"),
    ("신청", "Đăng ký"),
    ("제출", "Nộp"),
    ("기한", "Hạn chót"),
    ("일정", "Lịch trình"),
    ("장소", "Địa điểm"),
    ("대상", "Đối tượng"),
    ("준비물", "Đồ cần chuẩn bị"),
    ("상담", "Tư vấn"),
    ("문의", "Liên hệ"),
    ("결석", "Vắng mặt"),
    ("출석", "Có mặt"),
];

const RU: &[(&str, &str)] = &[
    ("가정통신문", "Письмо родителям"),
    ("방과후학교", "Внеурочные занятия"),
    ("초등학교", "Начальная школа"),
    ("중학교", "Средняя школа"),
    ("고등학교", "Старшая школа"),
    ("여름방학", "Летние каникулы"),
    ("겨울방학", "Зимние каникулы"),
    ("현장학습", "Экскурсия"),
    ("수학여행", "Учебная поездка"),
    ("운동회", "Спортивный праздник"),
    ("입학식", "Церемония поступления"),
    ("졸업식", "Выпускная церемония"),
    ("예방접종", "Вакцинация"),
    ("건강검진", "Медицинский осмотр"),
    ("돌봄교실", "Группа продлённого дня"),
    ("보건실", "Медпункт"),
    ("학년도", "Учебный год"),
    ("신청서", "Бланк заявления"),
    ("안내문", "Информационное письмо"),
    ("학부모", "Родители"),
    ("보호자", "Опекун"),
    ("선생님", "Учитель"),
    ("교장", "Директор"),
    ("교감", "Заместитель директора"),
    ("담임", "Классный руководитель"),
    ("학생", "Ученик"),
    ("학기", "Семестр"),
    ("학년", "Класс"),
    ("방학", "Каникулы"),
    ("개학", "Начало занятий"),
    ("입학", "Поступление"),
    ("졸업", "Выпуск"),
    ("급식", "Школьное питание"),
    ("운동장", "Спортивная площадка"),
    ("교실", "Кабинет"),
    ("강당", "Актовый зал"),
    ("학교", "Школа"),
    ("안내", "Уведомление"),
    ("신청", "Заявление"),
    ("제출", "Подача"),
    ("기한", "Срок"),
    ("일정", "Расписание"),
    ("장소", "Место проведения"),
    ("대상", "Участники"),
    ("준비물", "Необходимые принадлежности"),
    ("상담", "Консультация"),
    ("문의", "Справки"),
    ("결석", "Отсутствие"),
    ("출석", "Посещаемость"),
];
