use crate::models::comic::ChapterRef;

/// Linear walk over a manga's chapter list, as ordered by the API.
#[derive(Debug, Clone, Default)]
pub struct ChapterNavigator {
    chapters: Vec<ChapterRef>,
    current: String,
}

impl ChapterNavigator {
    pub fn new(chapters: Vec<ChapterRef>, current: &str) -> Self {
        Self { chapters, current: current.to_string() }
    }

    fn position(&self) -> Option<usize> {
        self.chapters.iter().position(|chapter| chapter.slug == self.current)
    }

    pub fn previous(&self) -> Option<&ChapterRef> {
        let index = self.position()?;
        index.checked_sub(1).and_then(|i| self.chapters.get(i))
    }

    pub fn next(&self) -> Option<&ChapterRef> {
        let index = self.position()?;
        self.chapters.get(index + 1)
    }
}
