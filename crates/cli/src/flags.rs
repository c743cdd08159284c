use clap::ValueEnum;
use folio_pagination::{PageLinker, PrettyLinker, QueryLinker};

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum LinkStyle {
    /// `?paged=N`
    Query,
    /// `/page/N/`
    Pretty,
}

impl LinkStyle {
    pub(crate) fn linker(self, base: &str) -> Box<dyn PageLinker> {
        match self {
            LinkStyle::Query => Box::new(QueryLinker::new(base)),
            LinkStyle::Pretty => Box::new(PrettyLinker::new(base)),
        }
    }
}
