use crate::domain::entities::Post;
use async_trait::async_trait;

/// 投稿エンティティ用のキャッシュポート
///
/// エントリは投稿IDをキーとする不変スナップショット。同一IDへの
/// 再挿入は常に上書き（last-write-wins）。
#[async_trait]
pub trait PostCache: Send + Sync {
    /// 投稿をキャッシュに追加
    async fn add(&self, post: Post);

    /// 複数の投稿をキャッシュに追加
    async fn add_many(&self, posts: Vec<Post>);

    /// ID でキャッシュを検索
    async fn get(&self, id: &str) -> Option<Post>;

    /// 最後に書き込まれた順で最大 `count` 件を返す。
    /// 読み取りは順序に影響しない。
    async fn latest(&self, count: usize) -> Vec<Post>;

    /// キャッシュから投稿を削除
    async fn remove(&self, id: &str) -> Option<Post>;

    /// キャッシュをクリア
    async fn clear(&self);

    /// キャッシュサイズを取得
    async fn size(&self) -> usize;
}
