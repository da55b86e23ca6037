//! Application state

use sheet_core::{Ability, HistoryEntry, Session, RECENT_LIMIT};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sheet,
    Skills,
    Abilities,
    History,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Sheet, Tab::Skills, Tab::Abilities, Tab::History, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Sheet => "Ficha",
            Tab::Skills => "Perícias",
            Tab::Abilities => "Habilidades",
            Tab::History => "Histórico",
            Tab::Help => "Ajuda",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub session: Session,
    /// Index into the skill table, in dataset order
    pub selected_skill: usize,
    pub selected_ability: usize,
    /// Index into the recent history window
    pub selected_history: usize,
    /// Show the selected history entry as JSON
    pub history_expanded: bool,
    /// Last failure, shown in the footer until the next action
    pub status: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            current_tab: Tab::Sheet,
            session,
            selected_skill: 0,
            selected_ability: 0,
            selected_history: 0,
            history_expanded: false,
            status: None,
            show_help: false,
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    fn skill_count(&self) -> usize {
        self.session.character().skills.len()
    }

    /// Rows in the left skill column
    pub fn left_column_len(&self) -> usize {
        self.skill_count().div_ceil(2)
    }

    pub fn history_window(&self) -> usize {
        self.session.history().len().min(RECENT_LIMIT)
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Skills => {
                if self.selected_skill > 0 {
                    self.selected_skill -= 1;
                }
            }
            Tab::Abilities => {
                if self.selected_ability > 0 {
                    self.selected_ability -= 1;
                }
            }
            Tab::History => {
                if self.selected_history > 0 {
                    self.selected_history -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Skills => {
                if self.selected_skill < self.skill_count().saturating_sub(1) {
                    self.selected_skill += 1;
                }
            }
            Tab::Abilities => {
                if self.selected_ability < Ability::ALL.len() - 1 {
                    self.selected_ability += 1;
                }
            }
            Tab::History => {
                if self.selected_history < self.history_window().saturating_sub(1) {
                    self.selected_history += 1;
                }
            }
            _ => {}
        }
    }

    /// Jump to the same row in the left skill column
    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Skills {
            let left = self.left_column_len();
            if self.selected_skill >= left {
                self.selected_skill -= left;
            }
        }
    }

    /// Jump to the same row in the right skill column
    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Skills {
            let left = self.left_column_len();
            if self.selected_skill < left {
                let target = self.selected_skill + left;
                self.selected_skill = target.min(self.skill_count().saturating_sub(1));
            }
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Skills => self.roll_selected_skill(),
            Tab::Abilities => self.cast_selected_ability(),
            Tab::History => self.history_expanded = !self.history_expanded,
            _ => {}
        }
    }

    pub fn selected_ability(&self) -> Ability {
        Ability::ALL[self.selected_ability.min(Ability::ALL.len() - 1)]
    }

    pub fn cast_selected_ability(&mut self) {
        let ability = self.selected_ability();
        match self.session.cast(ability) {
            Ok(_) => self.after_action(),
            Err(err) => self.fail(err.to_string()),
        }
    }

    pub fn roll_selected_skill(&mut self) {
        let Some(name) = self
            .session
            .character()
            .skills
            .get_index(self.selected_skill)
            .map(|skill| skill.name.clone())
        else {
            return;
        };
        match self.session.roll_skill(&name) {
            Ok(_) => self.after_action(),
            Err(err) => self.fail(err.to_string()),
        }
    }

    pub fn adjust_health(&mut self, delta: i32) {
        self.session.adjust_health(delta);
    }

    pub fn adjust_energy(&mut self, delta: i32) {
        self.session.adjust_energy(delta);
    }

    /// History entry under the cursor
    pub fn selected_history_entry(&self) -> Option<&HistoryEntry> {
        self.session.history().recent().nth(self.selected_history)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    fn after_action(&mut self) {
        self.status = None;
        // newest entry is at the top of the history view
        self.selected_history = 0;
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "action failed");
        self.status = Some(message);
    }
}
