//! Use-Cases: fachliche Operationen auf dem AppState.
//!
//! Jede Funktion lässt den Zustand bei abgelehnter Eingabe unverändert und
//! meldet die Bedingung über `AppState::report_condition`.

pub mod camera;
pub mod curves;
pub mod display;
pub mod points;
pub mod sketch;
