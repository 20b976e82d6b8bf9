use crate::error::ExtractionError;
use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use uuid::Uuid;

/// A decoded photo plus the bookkeeping that follows it through the pipeline.
#[derive(Clone)]
pub struct Photo {
    photo_id: Uuid,
    image: Arc<DynamicImage>,
    received_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            photo_id: Uuid::new_v4(),
            image: Arc::new(image),
            received_at: Utc::now(),
        }
    }

    /// Decode encoded bytes (JPEG, PNG, ...) into a photo.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let image = image::load_from_memory(bytes)
            .map_err(|err| ExtractionError::ImageDecode(err.to_string()))?;
        Ok(Self::new(image))
    }

    pub fn id(&self) -> Uuid {
        self.photo_id
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Photo")
            .field("photo_id", &self.photo_id)
            .field("dimensions", &self.dimensions())
            .field("received_at", &self.received_at)
            .finish()
    }
}
