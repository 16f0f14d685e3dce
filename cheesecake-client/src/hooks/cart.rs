use cheesecake::{PackageCart, PackageEntry};
use dioxus::prelude::*;

/// Handle to the session cart provided by `App`.
#[derive(Copy, Clone)]
pub struct CartContext {
    state: Signal<PackageCart>,
}

impl CartContext {
    pub fn add(&mut self, entry: PackageEntry) {
        self.state.write().add(entry);
    }

    pub fn clear(&mut self) {
        self.state.write().clear();
    }

    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    pub fn shows_export_affordance(&self) -> bool {
        self.state.read().shows_export_affordance()
    }

    /// Copy of the cart as it is right now, for exporting.
    pub fn snapshot(&self) -> PackageCart {
        self.state.read().clone()
    }
}

pub fn use_cart() -> CartContext {
    let state = use_context::<Signal<PackageCart>>();
    CartContext { state }
}
