pub(super) const UPSERT_POST: &str = r#"
    INSERT INTO posts (
        post_id,
        title,
        content,
        hashtags_json,
        created_at,
        author_json,
        clips_json,
        music_json,
        like_count,
        is_liked
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ON CONFLICT(post_id) DO UPDATE SET
        title = excluded.title,
        content = excluded.content,
        hashtags_json = excluded.hashtags_json,
        created_at = excluded.created_at,
        author_json = excluded.author_json,
        clips_json = excluded.clips_json,
        music_json = excluded.music_json,
        like_count = excluded.like_count,
        is_liked = excluded.is_liked
"#;

pub(super) const SELECT_POST_BY_ID: &str = r#"
    SELECT post_id, title, content, hashtags_json, created_at,
           author_json, clips_json, music_json, like_count, is_liked
    FROM posts
    WHERE post_id = ?1
"#;

pub(super) const SELECT_LATEST_POSTS: &str = r#"
    SELECT post_id, title, content, hashtags_json, created_at,
           author_json, clips_json, music_json, like_count, is_liked
    FROM posts
    ORDER BY created_at DESC
    LIMIT ?1
"#;

pub(super) const DELETE_POST: &str = r#"
    DELETE FROM posts WHERE post_id = ?1
"#;

pub(super) const COUNT_POSTS: &str = r#"
    SELECT COUNT(*) AS count FROM posts
"#;

pub(super) const UPSERT_FOLLOWED_USER: &str = r#"
    INSERT INTO followed_users (user_id, nickname, avatar, bio, followed_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(user_id) DO UPDATE SET
        nickname = excluded.nickname,
        avatar = excluded.avatar,
        bio = excluded.bio,
        followed_at = excluded.followed_at
"#;

pub(super) const DELETE_FOLLOWED_USER: &str = r#"
    DELETE FROM followed_users WHERE user_id = ?1
"#;

pub(super) const SELECT_FOLLOWED_USERS: &str = r#"
    SELECT user_id, nickname, avatar, bio, followed_at
    FROM followed_users
    ORDER BY followed_at DESC
"#;

pub(super) const SELECT_FOLLOWED_USER_EXISTS: &str = r#"
    SELECT EXISTS(SELECT 1 FROM followed_users WHERE user_id = ?1) AS present
"#;

pub(super) const COUNT_FOLLOWED_USERS: &str = r#"
    SELECT COUNT(*) AS count FROM followed_users
"#;

pub(super) const UPSERT_PREFERENCE: &str = r#"
    INSERT INTO preferences (key, value)
    VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

pub(super) const SELECT_PREFERENCE: &str = r#"
    SELECT value FROM preferences WHERE key = ?1
"#;

pub(super) const DELETE_PREFERENCE: &str = r#"
    DELETE FROM preferences WHERE key = ?1
"#;
