use crate::launcher::{Activation, LauncherHandle, LauncherHost};
use slab::Slab;
use std::cell::RefCell;
use std::rc::Rc;

/// One clickable icon in the ribbon.
#[derive(Debug, Clone)]
pub struct RibbonIcon {
    pub icon: String,
    pub label: String,
    pub on_activate: Activation,
    seq: u64,
}

#[derive(Default)]
struct RibbonState {
    icons: Slab<RibbonIcon>,
    next_seq: u64,
}

/// Side toolbar that hosts the pinned note launchers.
#[derive(Clone, Default)]
pub struct Ribbon {
    state: Rc<RefCell<RibbonState>>,
}

pub struct RibbonHandle {
    key: usize,
    state: Rc<RefCell<RibbonState>>,
}

impl LauncherHandle for RibbonHandle {
    fn remove(self) {
        self.state.borrow_mut().icons.try_remove(self.key);
    }
}

impl LauncherHost for Ribbon {
    type Handle = RibbonHandle;

    fn create(
        &mut self,
        icon: &str,
        label: &str,
        on_activate: Activation,
    ) -> anyhow::Result<RibbonHandle> {
        let mut state = self.state.borrow_mut();
        let seq = state.next_seq;
        state.next_seq += 1;
        let key = state.icons.insert(RibbonIcon {
            icon: icon.to_string(),
            label: label.to_string(),
            on_activate,
            seq,
        });
        Ok(RibbonHandle {
            key,
            state: Rc::clone(&self.state),
        })
    }
}

impl Ribbon {
    /// Icons in creation order.
    pub fn icons(&self) -> Vec<RibbonIcon> {
        let state = self.state.borrow();
        let mut icons: Vec<_> = state.icons.iter().map(|(_, i)| i.clone()).collect();
        icons.sort_by_key(|i| i.seq);
        icons
    }

    pub fn len(&self) -> usize {
        self.state.borrow().icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
