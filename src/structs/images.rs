use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub id: i64,
    pub url: String,
    pub author: String,
}

impl Image {
    pub fn new(id: i64, url: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            author: author.into(),
        }
    }
}

/// POST /images 的 body，id 可以是數字或數字字串
#[derive(Deserialize)]
struct RawNewImage {
    id: Value,
    url: String,
    author: String,
}

#[derive(Debug, PartialEq)]
pub struct NewImage {
    pub id: i64,
    pub url: String,
    pub author: String,
}

impl NewImage {
    /// 解析 request body，失敗時回傳 400 類的錯誤
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let raw: RawNewImage =
            serde_json::from_slice(body).map_err(|err| AppError::InvalidJson(err.to_string()))?;

        Ok(Self {
            id: coerce_id(&raw.id)?,
            url: raw.url,
            author: raw.author,
        })
    }
}

impl From<NewImage> for Image {
    fn from(new_image: NewImage) -> Self {
        Self {
            id: new_image.id,
            url: new_image.url,
            author: new_image.author,
        }
    }
}

fn coerce_id(value: &Value) -> Result<i64, AppError> {
    match value {
        Value::Number(number) => {
            if let Some(id) = number.as_i64() {
                return Ok(id);
            }

            // 4.0 這種整數值的浮點數也接受
            match number.as_f64() {
                Some(id) if id.fract() == 0.0 && id >= i64::MIN as f64 && id < i64::MAX as f64 => {
                    Ok(id as i64)
                }
                _ => Err(AppError::InvalidId(number.to_string())),
            }
        }
        Value::String(text) => parse_id(text),
        other => Err(AppError::InvalidId(other.to_string())),
    }
}

pub fn parse_id(text: &str) -> Result<i64, AppError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidId(text.to_string()))
}

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub count: Option<String>,
}

/// 沒帶 count 代表全部，帶了就必須是非負整數，超過 usize 的視為全部
pub fn parse_count(count: Option<&str>) -> Result<Option<usize>, AppError> {
    let Some(text) = count else {
        return Ok(None);
    };

    match text.trim().parse::<usize>() {
        Ok(count) => Ok(Some(count)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(Some(usize::MAX)),
        Err(_) => Err(AppError::InvalidCount(text.to_string())),
    }
}
