use serde::Serialize;
use storyline_types::DynamicValue;

/// An uploaded media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub id: i64,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Asset {
    /// Reads an asset object.
    ///
    /// The CMS fills an empty asset slot with `{"id": null, "filename": ""}`,
    /// so a missing id or an empty filename yields `None`.
    #[must_use]
    pub fn from_value(value: &DynamicValue) -> Option<Self> {
        let id = value.get("id").and_then(DynamicValue::as_int)?;
        let filename = value
            .get("filename")
            .and_then(DynamicValue::as_str)
            .filter(|f| !f.is_empty())?;
        let alt = value
            .get("alt")
            .and_then(DynamicValue::as_str)
            .filter(|a| !a.is_empty())
            .map(str::to_owned);

        Some(Self {
            id,
            filename: filename.to_owned(),
            alt,
        })
    }
}

/// Asset accessor for dynamic values.
pub trait AssetExt {
    fn as_asset(&self) -> Option<Asset>;
}

impl AssetExt for DynamicValue {
    fn as_asset(&self) -> Option<Asset> {
        Asset::from_value(self)
    }
}
