use crate::{
    models::post::{Post, PostRegisterDto, PostResponseDto},
    repositories::post_repo::PostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct PostService<R> {
    repo: R,
}

impl<R: PostsRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_all_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.find_all().await?;
        Ok(posts)
    }

    pub async fn get_post_by_id(&self, post_id: i64) -> Result<PostResponseDto> {
        let post = self.repo.find_by_id(post_id).await?;
        let post = post.ok_or(Error::NotFound)?;
        Ok(PostResponseDto::from(post))
    }

    pub async fn create_post(&self, new_post: PostRegisterDto) -> Result<Post> {
        let post = self.repo.create(&new_post.title, &new_post.content).await?;
        Ok(post)
    }

    pub async fn update_post(&self, post_id: i64, updated_post: PostRegisterDto) -> Result<Post> {
        let post = self
            .repo
            .update(post_id, &updated_post.title, &updated_post.content)
            .await?;
        let post = post.ok_or(Error::NotFound)?;
        Ok(post)
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<()> {
        self.repo.delete_by_id(post_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<(i64, Vec<Post>)>,
    }

    #[async_trait]
    impl PostsRepository for InMemoryRepo {
        async fn find_all(&self) -> Result<Vec<Post>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.1.clone())
        }

        async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.1.iter().find(|p| p.id == post_id).cloned())
        }

        async fn create(&self, title: &str, content: &str) -> Result<Post> {
            let mut rows = self.rows.lock().unwrap();
            rows.0 += 1;
            let post = Post {
                id: rows.0,
                title: title.to_string(),
                content: content.to_string(),
            };
            rows.1.push(post.clone());
            Ok(post)
        }

        async fn update(&self, post_id: i64, title: &str, content: &str) -> Result<Option<Post>> {
            let mut rows = self.rows.lock().unwrap();
            match rows.1.iter_mut().find(|p| p.id == post_id) {
                Some(post) => {
                    post.title = title.to_string();
                    post.content = content.to_string();
                    Ok(Some(post.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete_by_id(&self, post_id: i64) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            rows.1.retain(|p| p.id != post_id);
            Ok(())
        }
    }

    fn post_service() -> PostService<InMemoryRepo> {
        PostService::new(InMemoryRepo::default())
    }

    fn register_dto(title: &str, content: &str) -> PostRegisterDto {
        PostRegisterDto {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn get_all_posts_on_empty_store_returns_empty() {
        let service = post_service();

        let posts = service.get_all_posts().await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn create_post_assigns_id_and_shows_up_in_listing() {
        let service = post_service();

        let created = service.create_post(register_dto("T", "C")).await.unwrap();

        let posts = service.get_all_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.id);
        assert_eq!(posts[0].title, "T");
        assert_eq!(posts[0].content, "C");
    }

    #[tokio::test]
    async fn get_post_by_id_round_trips_title_and_content() {
        let service = post_service();
        let created = service
            .create_post(register_dto("hello", "world"))
            .await
            .unwrap();

        let response = service.get_post_by_id(created.id).await.unwrap();

        assert_eq!(response.title, "hello");
        assert_eq!(response.content, "world");
    }

    #[tokio::test]
    async fn get_post_by_id_on_missing_id_is_not_found() {
        let service = post_service();

        let err = service.get_post_by_id(42).await.unwrap_err();

        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn update_post_overwrites_in_place_without_duplicating() {
        let service = post_service();
        let created = service
            .create_post(register_dto("old title", "old content"))
            .await
            .unwrap();

        let updated = service
            .update_post(created.id, register_dto("X", "Y"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "X");
        assert_eq!(updated.content, "Y");

        let posts = service.get_all_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "X");
        assert_eq!(posts[0].content, "Y");
    }

    #[tokio::test]
    async fn update_post_on_missing_id_is_not_found() {
        let service = post_service();

        let err = service
            .update_post(7, register_dto("X", "Y"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn delete_post_is_idempotent() {
        let service = post_service();
        let created = service.create_post(register_dto("T", "C")).await.unwrap();

        service.delete_post(created.id).await.unwrap();
        service.delete_post(created.id).await.unwrap();

        let posts = service.get_all_posts().await.unwrap();
        assert!(posts.is_empty());
    }
}
