//! Player domain: system modules driving the simulation.

pub(crate) mod contacts;
pub(crate) mod drive;
pub(crate) mod input;

pub(crate) use drive::drive_player;
pub(crate) use input::read_input;
