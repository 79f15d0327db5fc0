/// 投稿の永続化レコード
///
/// 入れ子構造（ハッシュタグ・投稿者・クリップ・BGM）はJSON文字列の
/// カラムとして格納する。music_json のみ欠落し得る。
#[derive(Debug, Clone, PartialEq)]
pub struct PostEntity {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub hashtags_json: String,
    pub created_at: i64,
    pub author_json: String,
    pub clips_json: String,
    pub music_json: Option<String>,
    pub like_count: i64,
    pub is_liked: bool,
}

/// フォロー済みユーザーの永続化レコード
#[derive(Debug, Clone, PartialEq)]
pub struct FollowedUserEntity {
    pub user_id: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: String,
    pub followed_at: i64,
}
