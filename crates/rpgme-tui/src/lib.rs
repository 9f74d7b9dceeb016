//! Terminal editor for rpgme characters.
//!
//! A ratatui front end that plays the part of the widget toolkit: it turns
//! key presses into widget events for a [`rpgme_core::CharacterEditor`] and
//! draws the views the editor renders.

pub mod app;
pub mod shared;
pub mod terminal;
pub mod views;
