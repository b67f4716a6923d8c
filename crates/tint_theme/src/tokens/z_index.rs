//! Z-index layer tokens.

/// Stacking layers for overlapping elements.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZLayer {
    Behind,
    Base,
    Dropdown,
    Sticky,
    Overlay,
    Modal,
    Popover,
    Toast,
    Max,
}

/// Z-index values per layer
#[derive(Clone, Debug, PartialEq)]
pub struct ZIndexTokens {
    pub behind: i32,
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub overlay: i32,
    pub modal: i32,
    pub popover: i32,
    pub toast: i32,
    pub max: i32,
}

impl ZIndexTokens {
    pub fn get(&self, layer: ZLayer) -> i32 {
        match layer {
            ZLayer::Behind => self.behind,
            ZLayer::Base => self.base,
            ZLayer::Dropdown => self.dropdown,
            ZLayer::Sticky => self.sticky,
            ZLayer::Overlay => self.overlay,
            ZLayer::Modal => self.modal,
            ZLayer::Popover => self.popover,
            ZLayer::Toast => self.toast,
            ZLayer::Max => self.max,
        }
    }
}

impl Default for ZIndexTokens {
    fn default() -> Self {
        Self {
            behind: -1,
            base: 0,
            dropdown: 10,
            sticky: 20,
            overlay: 30,
            modal: 40,
            popover: 50,
            toast: 60,
            max: 100,
        }
    }
}
