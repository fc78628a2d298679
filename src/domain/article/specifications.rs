use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::UserId;

/// Only the author of an article may update or delete it.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}
