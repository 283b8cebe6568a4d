// crates/frameforge-core/src/tabs.rs
//
// Panel switching. Exactly one panel is active at a time. The highlighted
// button is tracked separately because it is whichever control raised the
// switch, handed in explicitly by the caller.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Process,
    Batch,
    Settings,
    Status,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Process, Tab::Batch, Tab::Settings, Tab::Status];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Process  => "process",
            Tab::Batch    => "batch",
            Tab::Settings => "settings",
            Tab::Status   => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Process  => "🎬  Process",
            Tab::Batch    => "📁  Batch",
            Tab::Settings => "⚙  Settings",
            Tab::Status   => "🩺  Status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    active_panel:  Tab,
    active_button: Option<Tab>,
}

impl Default for TabBar {
    fn default() -> Self {
        Self { active_panel: Tab::Process, active_button: Some(Tab::Process) }
    }
}

impl TabBar {
    /// Show `tab` and highlight the button that raised the switch.
    ///
    /// `origin` is the button the user clicked. Without one (a programmatic
    /// switch) the button bound to `tab` is highlighted instead. A mismatched
    /// origin is honoured as given.
    pub fn switch(&mut self, tab: Tab, origin: Option<Tab>) {
        self.active_button = None;
        self.active_panel  = tab;

        let button = origin.unwrap_or(tab);
        if button != tab {
            tracing::warn!(
                panel = tab.id(),
                button = button.id(),
                "tab switch highlighted a button for a different panel"
            );
        }
        self.active_button = Some(button);
    }

    pub fn active_panel(&self) -> Tab {
        self.active_panel
    }

    pub fn active_button(&self) -> Option<Tab> {
        self.active_button
    }

    pub fn is_panel_active(&self, tab: Tab) -> bool {
        self.active_panel == tab
    }

    pub fn is_button_active(&self, tab: Tab) -> bool {
        self.active_button == Some(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_panel_active_after_each_switch() {
        let mut bar = TabBar::default();
        for tab in Tab::ALL {
            bar.switch(tab, Some(tab));
            let active: Vec<_> = Tab::ALL.into_iter().filter(|t| bar.is_panel_active(*t)).collect();
            assert_eq!(active, vec![tab]);
            assert_eq!(bar.active_panel().id(), tab.id());
            assert!(bar.is_button_active(tab));
        }
    }

    #[test]
    fn programmatic_switch_highlights_matching_button() {
        let mut bar = TabBar::default();
        bar.switch(Tab::Status, None);
        assert_eq!(bar.active_button(), Some(Tab::Status));
    }

    #[test]
    fn mismatched_origin_is_preserved() {
        let mut bar = TabBar::default();
        bar.switch(Tab::Settings, Some(Tab::Batch));
        assert!(bar.is_panel_active(Tab::Settings));
        assert!(bar.is_button_active(Tab::Batch));
        assert!(!bar.is_button_active(Tab::Settings));
    }

    #[test]
    fn starts_on_process_tab() {
        let bar = TabBar::default();
        assert!(bar.is_panel_active(Tab::Process));
        assert!(bar.is_button_active(Tab::Process));
    }
}
