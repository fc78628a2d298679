use std::sync::Arc;

use crate::{application::assembler::ArticleAssembler, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) assembler: Arc<ArticleAssembler>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, assembler: Arc<ArticleAssembler>) -> Self {
        Self {
            read_repo,
            assembler,
        }
    }
}
