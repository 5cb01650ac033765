use crate::errors::CoreError;
use crate::models::blog::BlogPost;

/// Manages the home-page article listing.
///
/// Posts live on the facade; this service validates and orders them.
pub struct BlogService;

impl BlogService {
    pub fn new() -> Self {
        Self
    }

    /// Add a post to the listing.
    ///
    /// Rules:
    /// - Title must be non-empty
    /// - Ids must be unique within the listing
    pub fn add_post(&self, posts: &mut Vec<BlogPost>, post: BlogPost) -> Result<(), CoreError> {
        if post.title.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Post title must not be empty".into(),
            ));
        }
        if posts.iter().any(|p| p.id == post.id) {
            return Err(CoreError::ValidationError(format!(
                "Duplicate post id {}",
                post.id
            )));
        }
        posts.push(post);
        Ok(())
    }

    /// All posts, newest first (display order of the home page).
    pub fn get_posts<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        let mut listed: Vec<&BlogPost> = posts.iter().collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        listed
    }

    /// Look up a post by id.
    pub fn get_post<'a>(&self, posts: &'a [BlogPost], id: u32) -> Option<&'a BlogPost> {
        posts.iter().find(|p| p.id == id)
    }
}

impl Default for BlogService {
    fn default() -> Self {
        Self::new()
    }
}
