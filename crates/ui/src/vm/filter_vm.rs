use course_core::model::FilterMode;

/// One button in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptionVm {
    pub mode: FilterMode,
    pub label: String,
    pub active: bool,
}

/// "All", one button per language in first-seen order, then "Favorites".
#[must_use]
pub fn build_filter_options(languages: &[String], active: &FilterMode) -> Vec<FilterOptionVm> {
    let mut modes = Vec::with_capacity(languages.len() + 2);
    modes.push(FilterMode::All);
    modes.extend(languages.iter().cloned().map(FilterMode::Language));
    modes.push(FilterMode::Favorites);

    modes
        .into_iter()
        .map(|mode| FilterOptionVm {
            label: filter_label(&mode),
            active: &mode == active,
            mode,
        })
        .collect()
}

fn filter_label(mode: &FilterMode) -> String {
    match mode {
        FilterMode::All => "All".to_string(),
        FilterMode::Language(code) => code.to_uppercase(),
        FilterMode::Favorites => "❤️ Favorites".to_string(),
    }
}
