use crate::repositories::images::ImageStore;

#[derive(Clone)]
pub struct AppState {
    images: ImageStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            images: ImageStore::seeded(),
        }
    }

    pub fn with_store(images: ImageStore) -> Self {
        Self { images }
    }

    pub fn get_images(&self) -> &ImageStore {
        &self.images
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
