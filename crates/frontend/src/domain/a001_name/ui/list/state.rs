use contracts::domain::a001_name::aggregate::NameRecord;
use contracts::shared::name_filter::{filter_names, GenderFilter};
use contracts::shared::pagination::{paginate, Page, PageState, PAGE_SIZE};
use leptos::prelude::*;

/// Fetched names plus the view's filter and page position.
#[derive(Clone, Debug)]
pub struct NameListState {
    names: Vec<NameRecord>,
    loading: bool,
    filter: GenderFilter,
    pages: PageState,
}

impl Default for NameListState {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            loading: true,
            filter: GenderFilter::All,
            pages: PageState::default(),
        }
    }
}

impl NameListState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> GenderFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.pages.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pages.total_pages()
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// A new category arrived: start over at page 1.
    pub fn set_names(&mut self, names: Vec<NameRecord>) {
        self.names = names;
        self.loading = false;
        self.pages.reset();
        self.refresh_bounds();
    }

    /// Switch the gender tab. Returns false when the filter is unchanged.
    pub fn set_filter(&mut self, filter: GenderFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.pages.reset();
        self.refresh_bounds();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.pages.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pages.prev()
    }

    pub fn filtered(&self) -> Vec<NameRecord> {
        filter_names(&self.names, self.filter)
    }

    pub fn visible(&self) -> Page<NameRecord> {
        paginate(&self.filtered(), self.pages.page(), PAGE_SIZE)
    }

    fn refresh_bounds(&mut self) {
        let len = self.filtered().len();
        self.pages.set_total_items(len, PAGE_SIZE);
    }
}

pub fn create_state() -> RwSignal<NameListState> {
    RwSignal::new(NameListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_name::aggregate::NameId;
    use contracts::domain::a001_name::gender::Gender;

    fn names(count: usize, gender: Option<Gender>) -> Vec<NameRecord> {
        (0..count)
            .map(|i| NameRecord {
                id: NameId(format!("id-{i}")),
                name: format!("Name {i}"),
                meaning: None,
                origin: None,
                gender: gender.clone(),
                category: "Fantasy Races".into(),
                subcategory: "Elf Names".into(),
                popularity: None,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn starts_loading_and_settles_on_names() {
        let mut state = NameListState::default();
        assert!(state.is_loading());
        state.set_names(names(45, Some(Gender::Male)));
        assert!(!state.is_loading());
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible().items.len(), 20);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = NameListState::default();
        let mut all = names(30, Some(Gender::Male));
        all.extend(names(25, Some(Gender::Female)));
        state.set_names(all);
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.page(), 3);

        assert!(state.set_filter(GenderFilter::Female));
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 2);
        assert!(!state.set_filter(GenderFilter::Female));
    }

    #[test]
    fn new_names_reset_page() {
        let mut state = NameListState::default();
        state.set_names(names(50, None));
        state.next_page();
        state.begin_loading();
        state.set_names(names(3, None));
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.next_page());
    }

    #[test]
    fn empty_filter_result_has_one_page() {
        let mut state = NameListState::default();
        state.set_names(names(5, Some(Gender::Male)));
        state.set_filter(GenderFilter::Female);
        assert!(state.visible().items.is_empty());
        assert_eq!(state.total_pages(), 1);
        // untagged names count as unisex
        state.set_names(names(4, None));
        state.set_filter(GenderFilter::Unisex);
        assert_eq!(state.filtered().len(), 4);
    }
}
