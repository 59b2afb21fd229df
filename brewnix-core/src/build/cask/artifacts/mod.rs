// brewnix-core/src/build/cask/artifacts/mod.rs
pub mod app;
pub mod binary;
pub mod generic;
pub mod installer;
pub mod manpage;
pub mod moved;

pub use self::{
    app::lower_app, binary::lower_binary, generic::lower_generic, installer::reject_installer,
    installer::reject_pkg, manpage::lower_manpage, moved::lower_moved,
};
