use std::{collections::VecDeque, sync::Arc};

use tokio::sync::RwLock;

use crate::structs::images::Image;

/// process 內的 image 清單，新的 image 一律放在最前面
#[derive(Clone, Default)]
pub struct ImageStore {
    images: Arc<RwLock<VecDeque<Image>>>,
}

impl ImageStore {
    /// 啟動時的預設資料
    pub fn seeded() -> Self {
        Self::from_images(vec![
            Image::new(1, "https://foo.com/img1", "Bart Simpson"),
            Image::new(2, "https://foo.com/img2", "Bart Simpson"),
            Image::new(3, "https://bar.com/img1", "Lara Lobster"),
            Image::new(4, "https://bar.com/img2", "Lara Lobster"),
        ])
    }

    pub fn from_images(images: Vec<Image>) -> Self {
        Self {
            images: Arc::new(RwLock::new(images.into())),
        }
    }

    /// 取前 count 筆，count 超過長度時回傳全部
    pub async fn list(&self, count: Option<usize>) -> Vec<Image> {
        let images = self.images.read().await;
        let count = count.unwrap_or(images.len());

        images.iter().take(count).cloned().collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Image> {
        let images = self.images.read().await;

        images.iter().find(|image| image.id == id).cloned()
    }

    pub async fn prepend(&self, image: Image) -> Image {
        let mut images = self.images.write().await;
        images.push_front(image.clone());

        image
    }

    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.read().await.is_empty()
    }
}
