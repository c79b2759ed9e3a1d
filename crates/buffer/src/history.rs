/// Action for undo/redo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text insertion at char offset
    Insert { offset: usize, text: String },
    /// Text deletion at char offset
    Delete { offset: usize, text: String },
    /// Actions undone and redone as one step
    Group { actions: Vec<Action> },
}

impl Action {
    /// Get inverse action
    pub fn inverse(&self) -> Action {
        match self {
            Action::Insert { offset, text } => Action::Delete {
                offset: *offset,
                text: text.clone(),
            },
            Action::Delete { offset, text } => Action::Insert {
                offset: *offset,
                text: text.clone(),
            },
            Action::Group { actions } => Action::Group {
                actions: actions.iter().rev().map(|a| a.inverse()).collect(),
            },
        }
    }

    /// Check if can merge with another action
    pub fn can_merge_with(&self, other: &Action) -> bool {
        match (self, other) {
            // Merge consecutive character insertions on same line
            (
                Action::Insert {
                    offset: pos1,
                    text: text1,
                },
                Action::Insert {
                    offset: pos2,
                    text: text2,
                },
            ) => {
                text2.chars().count() == 1
                    && !text2.contains('\n')
                    && !text1.contains('\n')
                    && *pos2 == pos1 + text1.chars().count()
            }
            // Merge consecutive backspaces
            (
                Action::Delete {
                    offset: pos1,
                    text: text1,
                },
                Action::Delete {
                    offset: pos2,
                    text: text2,
                },
            ) => {
                text2.chars().count() == 1
                    && !text2.contains('\n')
                    && !text1.contains('\n')
                    && pos2 + 1 == *pos1
            }
            _ => false,
        }
    }

    /// Merge with another action
    pub fn merge(&mut self, other: Action) {
        match (self, other) {
            (Action::Insert { text: text1, .. }, Action::Insert { text: text2, .. }) => {
                text1.push_str(&text2);
            }
            (
                Action::Delete {
                    offset,
                    text: text1,
                },
                Action::Delete {
                    offset: pos2,
                    text: text2,
                },
            ) => {
                // Backspace - add character to beginning
                *offset = pos2;
                text1.insert_str(0, &text2);
            }
            _ => {}
        }
    }
}

/// Edit history for undo/redo
#[derive(Debug, Clone)]
pub struct History {
    /// Action stack for undo
    undo_stack: Vec<Action>,
    /// Action stack for redo
    redo_stack: Vec<Action>,
    /// Maximum history size
    max_size: usize,
    /// Current accumulated action
    pending_action: Option<Action>,
    /// Actions collected by an open group
    group: Option<Vec<Action>>,
    /// Nesting depth of begin_group calls
    group_depth: usize,
}

impl History {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create history with specified size
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
            pending_action: None,
            group: None,
            group_depth: 0,
        }
    }

    /// Record action to history
    pub fn push(&mut self, action: Action) {
        // Clear redo stack on new action
        self.redo_stack.clear();

        if let Some(group) = &mut self.group {
            group.push(action);
            return;
        }

        // Try to merge with previous action
        if let Some(pending) = &mut self.pending_action {
            if pending.can_merge_with(&action) {
                pending.merge(action);
                return;
            }
        }

        // Cannot merge - save accumulated action and start new accumulation
        self.commit_pending();
        self.pending_action = Some(action);
    }

    /// Complete current action group (e.g., on cursor jump)
    pub fn commit_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            self.push_undo(action);
        }
    }

    /// Start collecting actions into one undo step
    pub fn begin_group(&mut self) {
        if self.group_depth == 0 {
            self.commit_pending();
            self.group = Some(Vec::new());
        }
        self.group_depth += 1;
    }

    /// Close the group opened by `begin_group`
    pub fn end_group(&mut self) {
        if self.group_depth == 0 {
            return;
        }
        self.group_depth -= 1;
        if self.group_depth > 0 {
            return;
        }

        if let Some(actions) = self.group.take() {
            match actions.len() {
                0 => {}
                1 => {
                    if let Some(action) = actions.into_iter().next() {
                        self.push_undo(action);
                    }
                }
                _ => self.push_undo(Action::Group { actions }),
            }
        }
    }

    fn push_undo(&mut self, action: Action) {
        self.undo_stack.push(action);

        // Limit history size
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo last action
    pub fn undo(&mut self) -> Option<Action> {
        // First complete current action
        self.commit_pending();

        let action = self.undo_stack.pop()?;
        let inverse = action.inverse();
        self.redo_stack.push(action);
        Some(inverse)
    }

    /// Redo undone action
    pub fn redo(&mut self) -> Option<Action> {
        // Complete current action before redo
        self.commit_pending();

        let action = self.redo_stack.pop()?;
        // Return original action (not inverse!)
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.pending_action.is_some()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending_action = None;
        self.group = None;
        self.group_depth = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
