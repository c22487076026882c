// ============================================================================
// CONFERENCE MODEL - Estructuras compartidas con la API REST
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub firstname: String,
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Bloque de dirección de la conferencia (opcional en la API)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressl1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressl2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}

/// Par de colores que tematiza la página de la conferencia.
/// `main_color` sale del extractor de color dominante, `second_color`
/// se deriva aclarando el primero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceDesign {
    pub main_color: String,
    pub second_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub img: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_map: Option<OsMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stakeholders: Option<Vec<Stakeholder>>,
    pub design: ConferenceDesign,
}

/// Payload de creación/edición (sin `id` generado por el servidor en PATCH)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    pub description: String,
    pub img: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_map: Option<OsMap>,
    pub speakers: Vec<Speaker>,
    pub stakeholders: Vec<Stakeholder>,
    pub design: ConferenceDesign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conference_deserializes_camel_case_fields() {
        // Delimitadores r##: los colores hex contienen la secuencia `"#`
        let json = r##"{
            "id": "ai-2026",
            "title": "AI Summit",
            "date": "2026-03-12",
            "description": "desc",
            "img": "https://example.com/poster.jpg",
            "content": "content",
            "osMap": { "postalCode": "75001", "city": "Paris" },
            "design": { "mainColor": "#6366f1", "secondColor": "#818cf8" }
        }"##;
        let conf: Conference = serde_json::from_str(json).unwrap();
        assert_eq!(conf.id, "ai-2026");
        assert_eq!(conf.design.main_color, "#6366f1");
        assert_eq!(
            conf.os_map.unwrap().postal_code.as_deref(),
            Some("75001")
        );
        assert!(conf.speakers.is_none());
    }
}
