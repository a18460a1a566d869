/// Mock reading material shown when a chapter is opened.
///
/// Courses ship without real chapter bodies, so every chapter gets the same
/// Markdown template filled in with its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterContent {
    index: usize,
    title: String,
    markdown: String,
}

impl ChapterContent {
    #[must_use]
    pub fn placeholder(title: &str, index: usize) -> Self {
        let title = title.trim();
        let markdown = format!(
            "## {title}\n\
             \n\
             Welcome to this module. In this section we explore the core ideas behind **{title}** in depth.\n\
             \n\
             > 💡 **Key concept:** understanding {title} is essential for the rest of the course.\n\
             \n\
             Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed non risus. \
             Suspendisse lectus tortor, dignissim sit amet, adipiscing nec, ultricies sed, dolor.\n\
             \n\
             ### Key takeaways\n\
             \n\
             - The fundamentals of this topic.\n\
             - How to apply it to real cases.\n\
             - Common mistakes to avoid.\n\
             \n\
             Remember to tick this chapter in the list once you have finished reading!\n"
        );
        Self {
            index,
            title: title.to_owned(),
            markdown,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-based label, e.g. "Chapter 3".
    #[must_use]
    pub fn badge_label(&self) -> String {
        format!("Chapter {}", self.index + 1)
    }

    #[must_use]
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_mentions_title_and_one_based_index() {
        let content = ChapterContent::placeholder("  Closures ", 2);
        assert_eq!(content.title(), "Closures");
        assert_eq!(content.badge_label(), "Chapter 3");
        assert!(content.markdown().starts_with("## Closures\n"));
        assert!(content.markdown().contains("**Closures**"));
        assert!(content.markdown().contains("### Key takeaways"));
    }
}
