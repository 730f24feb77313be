use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use serde::{Deserialize, Serialize};

use crate::translator::Translator;

pub fn create_router(translator: Arc<Translator>) -> Router {
    Router::new()
        .route("/healthz", routing::get(get_healthz))
        .route("/api/languages", routing::get(get_languages))
        .route("/api/translate", routing::post(post_translate))
        .route("/api/translate/batch", routing::post(post_translate_batch))
        .with_state(translator)
}

async fn get_healthz() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct LanguagesResp {
    languages: Vec<String>,
}

async fn get_languages(State(translator): State<Arc<Translator>>) -> Json<LanguagesResp> {
    Json(LanguagesResp {
        languages: translator.supported_languages(),
    })
}

// Notice text is always authored in Korean.
fn default_source_language() -> String {
    "ko".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateReq {
    #[serde(default)]
    text: String,
    target_language: String,
    #[serde(default = "default_source_language")]
    source_language: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResp {
    original_text: String,
    translated_text: String,
    source_language: String,
    target_language: String,
}

async fn post_translate(
    State(translator): State<Arc<Translator>>,
    Json(req): Json<TranslateReq>,
) -> Json<TranslateResp> {
    let translated_text = translator.translate(&req.text, &req.target_language);
    Json(TranslateResp {
        original_text: req.text,
        translated_text,
        source_language: req.source_language,
        target_language: req.target_language,
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBatchReq {
    #[serde(default)]
    texts: Vec<String>,
    target_language: String,
    #[serde(default = "default_source_language")]
    source_language: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBatchResp {
    original_texts: Vec<String>,
    translated_texts: Vec<String>,
    source_language: String,
    target_language: String,
}

async fn post_translate_batch(
    State(translator): State<Arc<Translator>>,
    Json(req): Json<TranslateBatchReq>,
) -> Json<TranslateBatchResp> {
    let translated_texts = translator.translate_batch(&req.texts, &req.target_language);
    Json(TranslateBatchResp {
        original_texts: req.texts,
        translated_texts,
        source_language: req.source_language,
        target_language: req.target_language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Arc<Translator> {
        Arc::new(Translator::builtin().expect("builtin dictionary must load"))
    }

    #[tokio::test]
    async fn translate_returns_translated_text_and_echoes_languages() {
        let Json(resp) = post_translate(
            State(translator()),
            Json(TranslateReq {
                text: "초등학교 안내".to_string(),
                target_language: "en".to_string(),
                source_language: "ko".to_string(),
            }),
        )
        .await;

        assert_eq!(resp.original_text, "초등학교 안내");
        assert_eq!(resp.translated_text, "Elementary School Notice");
        assert_eq!(resp.source_language, "ko");
        assert_eq!(resp.target_language, "en");
    }

    #[tokio::test]
    async fn translate_passes_unknown_language_through() {
        let Json(resp) = post_translate(
            State(translator()),
            Json(TranslateReq {
                text: "안내".to_string(),
                target_language: "fr".to_string(),
                source_language: "ko".to_string(),
            }),
        )
        .await;

        assert_eq!(resp.translated_text, "안내");
        assert_eq!(resp.target_language, "fr");
    }

    #[tokio::test]
    async fn translate_batch_keeps_order_and_length() {
        let Json(resp) = post_translate_batch(
            State(translator()),
            Json(TranslateBatchReq {
                texts: vec![
                    "학년도".to_string(),
                    String::new(),
                    "교장".to_string(),
                ],
                target_language: "ru".to_string(),
                source_language: "ko".to_string(),
            }),
        )
        .await;

        assert_eq!(resp.original_texts.len(), resp.translated_texts.len());
        assert_eq!(
            resp.translated_texts,
            vec![
                "Учебный год".to_string(),
                String::new(),
                "Директор".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn languages_lists_configured_codes() {
        let Json(resp) = get_languages(State(translator())).await;
        assert_eq!(resp.languages, vec!["en", "zh-CN", "vi", "ru"]);
    }

    #[test]
    fn request_fields_are_camel_case_with_defaults() {
        let req: TranslateReq =
            serde_json::from_str(r#"{"text":"안내","targetLanguage":"en"}"#)
                .expect("request must deserialize");
        assert_eq!(req.text, "안내");
        assert_eq!(req.target_language, "en");
        assert_eq!(req.source_language, "ko");

        let req: TranslateBatchReq = serde_json::from_str(
            r#"{"texts":["안내"],"targetLanguage":"vi","sourceLanguage":"ko-KR"}"#,
        )
        .expect("request must deserialize");
        assert_eq!(req.source_language, "ko-KR");
    }

    #[test]
    fn response_fields_are_camel_case() {
        let resp = TranslateResp {
            original_text: "안내".to_string(),
            translated_text: "Notice".to_string(),
            source_language: "ko".to_string(),
            target_language: "en".to_string(),
        };
        let value = serde_json::to_value(&resp).expect("response must serialize");
        assert_eq!(value["originalText"], "안내");
        assert_eq!(value["translatedText"], "Notice");
        assert_eq!(value["sourceLanguage"], "ko");
        assert_eq!(value["targetLanguage"], "en");
    }
}
