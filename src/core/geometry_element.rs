//! Freie Skizzen-Elemente (unabhängig von den markierten Punkten).

use glam::DVec2;
use serde::Serialize;

/// Element einer Freihand-Skizze
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GeometryElement {
    /// Einzelner Punkt
    Point {
        /// Eindeutige ID innerhalb der Skizze
        id: u64,
        /// Position in Mathe-Koordinaten
        position: DVec2,
    },
    /// Strecke zwischen zwei Punkten
    LineSegment {
        /// Eindeutige ID innerhalb der Skizze
        id: u64,
        /// Startpunkt
        start: DVec2,
        /// Endpunkt
        end: DVec2,
    },
}

impl GeometryElement {
    /// ID des Elements
    pub fn id(&self) -> u64 {
        match self {
            Self::Point { id, .. } | Self::LineSegment { id, .. } => *id,
        }
    }

    /// Alle Eckpunkte des Elements (Fangziele für neue Strecken).
    pub fn anchor_points(&self) -> impl Iterator<Item = DVec2> {
        let anchors = match *self {
            Self::Point { position, .. } => [Some(position), None],
            Self::LineSegment { start, end, .. } => [Some(start), Some(end)],
        };
        anchors.into_iter().flatten()
    }
}

/// Skizzen-Speicher, wird nicht persistiert.
#[derive(Debug, Clone, Default)]
pub struct SketchStore {
    elements: Vec<GeometryElement>,
    next_id: u64,
}

impl SketchStore {
    /// Leere Skizze
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fügt einen Punkt hinzu und gibt seine ID zurück.
    pub fn add_point(&mut self, position: DVec2) -> u64 {
        let id = self.allocate_id();
        self.elements.push(GeometryElement::Point { id, position });
        id
    }

    /// Fügt eine Strecke hinzu und gibt ihre ID zurück.
    pub fn add_segment(&mut self, start: DVec2, end: DVec2) -> u64 {
        let id = self.allocate_id();
        self.elements
            .push(GeometryElement::LineSegment { id, start, end });
        id
    }

    /// Entfernt alle Elemente.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Alle Elemente in Einfügereihenfolge
    pub fn elements(&self) -> &[GeometryElement] {
        &self.elements
    }

    /// Anzahl Elemente
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Skizze leer?
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Alle Fangpunkte der Skizze
    pub fn anchor_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.elements.iter().flat_map(GeometryElement::anchor_points)
    }
}
