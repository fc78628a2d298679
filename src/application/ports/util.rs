/// Turns an article title into a URL-safe slug candidate.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
