use crate::application::ports::feed_source::{RawAuthor, RawClip, RawHashtag, RawMusic, RawPost};
use crate::domain::entities::{Author, Clip, Hashtag, Music, Post};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};

/// 生の投稿レコードをドメインモデルへ変換する。
///
/// 必須: 空でない post_id / author / create_time。欠落したスカラーは
/// 既定値で補う。失敗は呼び出し側が「その項目を捨てる」単位で扱う。
pub fn post_from_raw(raw: RawPost) -> Result<Post, AppError> {
    let id = raw
        .post_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput("post_id is missing or empty".to_string()))?;

    let author = raw
        .author
        .ok_or_else(|| AppError::InvalidInput(format!("post {id} has no author")))
        .and_then(author_from_raw)?;

    let created_at = raw
        .create_time
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| AppError::InvalidInput(format!("post {id} has no valid create_time")))?;

    let hashtags = raw
        .hashtags
        .unwrap_or_default()
        .into_iter()
        .map(hashtag_from_raw)
        .collect::<Result<Vec<_>, _>>()?;

    let clips = raw
        .clips
        .unwrap_or_default()
        .into_iter()
        .map(clip_from_raw)
        .collect::<Result<Vec<_>, _>>()?;

    let music = raw.music.map(music_from_raw).transpose()?;

    Ok(Post {
        id,
        title: raw.title.unwrap_or_default(),
        content: raw.content.unwrap_or_default(),
        hashtags,
        created_at,
        author,
        clips,
        music,
        like_count: raw.like_count.unwrap_or(0),
        is_liked: raw.is_liked.unwrap_or(false),
    })
}

fn author_from_raw(raw: RawAuthor) -> Result<Author, AppError> {
    let id = raw
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput("author user_id is missing or empty".to_string()))?;

    Ok(Author {
        id,
        nickname: raw.nickname.unwrap_or_default(),
        avatar: raw.avatar.unwrap_or_default(),
    })
}

fn hashtag_from_raw(raw: RawHashtag) -> Result<Hashtag, AppError> {
    let title = raw
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| AppError::InvalidInput("hashtag title is missing".to_string()))?;
    Ok(Hashtag { title })
}

fn clip_from_raw(raw: RawClip) -> Result<Clip, AppError> {
    let url = raw
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::InvalidInput("clip url is missing".to_string()))?;

    Ok(Clip {
        url,
        duration_ms: raw.duration_ms.unwrap_or(0),
        order_index: raw.order_index.unwrap_or(0),
    })
}

fn music_from_raw(raw: RawMusic) -> Result<Music, AppError> {
    let url = raw
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::InvalidInput("music url is missing".to_string()))?;

    Ok(Music {
        id: raw.id.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        url,
    })
}
