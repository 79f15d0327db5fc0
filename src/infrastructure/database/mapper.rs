use super::entities::{FollowedUserEntity, PostEntity};
use crate::domain::entities::{Author, Clip, FollowedUser, Hashtag, Music, Post};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};

/// ドメインの投稿を永続化レコードへ変換する。
///
/// 整形済みのドメイン値に対しては常に成功する。時刻はミリ秒精度で
/// 格納するため、それ未満の精度は保存されない。
pub fn post_to_entity(post: &Post) -> PostEntity {
    PostEntity {
        post_id: post.id.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
        hashtags_json: serde_json::to_string(&post.hashtags).unwrap_or_else(|_| "[]".to_string()),
        created_at: post.created_at.timestamp_millis(),
        author_json: serde_json::to_string(&post.author).unwrap_or_else(|_| "{}".to_string()),
        clips_json: serde_json::to_string(&post.clips).unwrap_or_else(|_| "[]".to_string()),
        music_json: post
            .music
            .as_ref()
            .and_then(|music| serde_json::to_string(music).ok()),
        like_count: i64::from(post.like_count),
        is_liked: post.is_liked,
    }
}

/// 永続化レコードをドメインへ戻す。
///
/// 壊れたJSONカラムは `DeserializationError` になる。
pub fn post_from_entity(entity: PostEntity) -> Result<Post, AppError> {
    let hashtags: Vec<Hashtag> = serde_json::from_str(&entity.hashtags_json).map_err(|err| {
        AppError::DeserializationError(format!("hashtags of post {}: {err}", entity.post_id))
    })?;
    let author: Author = serde_json::from_str(&entity.author_json).map_err(|err| {
        AppError::DeserializationError(format!("author of post {}: {err}", entity.post_id))
    })?;
    let clips: Vec<Clip> = serde_json::from_str(&entity.clips_json).map_err(|err| {
        AppError::DeserializationError(format!("clips of post {}: {err}", entity.post_id))
    })?;
    let music: Option<Music> = entity
        .music_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|err| {
            AppError::DeserializationError(format!("music of post {}: {err}", entity.post_id))
        })?;

    let created_at = DateTime::<Utc>::from_timestamp_millis(entity.created_at).ok_or_else(|| {
        AppError::DeserializationError(format!(
            "timestamp of post {} is out of range: {}",
            entity.post_id, entity.created_at
        ))
    })?;

    Ok(Post {
        id: entity.post_id,
        title: entity.title,
        content: entity.content,
        hashtags,
        created_at,
        author,
        clips,
        music,
        like_count: u32::try_from(entity.like_count.max(0)).unwrap_or(u32::MAX),
        is_liked: entity.is_liked,
    })
}

pub fn followed_user_to_entity(user: &FollowedUser) -> FollowedUserEntity {
    FollowedUserEntity {
        user_id: user.user_id.clone(),
        nickname: user.nickname.clone(),
        avatar: user.avatar.clone(),
        bio: user.bio.clone(),
        followed_at: user.followed_at.timestamp_millis(),
    }
}

pub fn followed_user_from_entity(entity: FollowedUserEntity) -> Result<FollowedUser, AppError> {
    let followed_at =
        DateTime::<Utc>::from_timestamp_millis(entity.followed_at).ok_or_else(|| {
            AppError::DeserializationError(format!(
                "followed_at of user {} is out of range: {}",
                entity.user_id, entity.followed_at
            ))
        })?;

    Ok(FollowedUser {
        user_id: entity.user_id,
        nickname: entity.nickname,
        avatar: entity.avatar,
        bio: entity.bio,
        followed_at,
    })
}
