//! Geordnete Sammlung markierter Punkte (maximal 10, Labels A–J).

use super::GraphError;
use glam::DVec2;
use serde::Serialize;

/// Maximale Anzahl markierter Punkte.
pub const MAX_MARKED_POINTS: usize = 10;
/// Labels in Vergabereihenfolge.
pub const POINT_LABELS: [&str; MAX_MARKED_POINTS] =
    ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Vom Nutzer markierter Punkt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkedPoint {
    /// Stabile ID (bleibt beim Umbenennen erhalten)
    pub id: u64,
    /// Label entsprechend der aktuellen Position in der Liste
    pub label: &'static str,
    /// Position in Mathe-Koordinaten
    pub position: DVec2,
}

/// Abstand zwischen zwei aufeinanderfolgenden Punkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDistance<'a> {
    /// Startpunkt
    pub from: &'a MarkedPoint,
    /// Endpunkt
    pub to: &'a MarkedPoint,
    /// Euklidischer Abstand in Mathe-Einheiten
    pub distance: f64,
}

/// Punktspeicher mit fortlaufender Label-Vergabe.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<MarkedPoint>,
    next_id: u64,
}

impl PointStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Punkt hinten an und gibt seine ID zurück.
    pub fn add(&mut self, position: DVec2) -> Result<u64, GraphError> {
        if self.is_full() {
            return Err(GraphError::PointCapacityReached {
                capacity: MAX_MARKED_POINTS,
            });
        }
        if !position.is_finite() {
            return Err(GraphError::NonFiniteValue);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.points.push(MarkedPoint {
            id,
            label: POINT_LABELS[self.points.len()],
            position,
        });
        Ok(id)
    }

    /// Entfernt den Punkt am Index; alle folgenden Punkte rücken nach und
    /// werden neu beschriftet.
    pub fn remove_at(&mut self, index: usize) -> Result<MarkedPoint, GraphError> {
        if index >= self.points.len() {
            return Err(GraphError::PointIndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let removed = self.points.remove(index);
        self.relabel();
        Ok(removed)
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn relabel(&mut self) {
        for (point, label) in self.points.iter_mut().zip(POINT_LABELS) {
            point.label = label;
        }
    }

    /// Anzahl Punkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Keine Punkte vorhanden?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kapazität erreicht?
    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_MARKED_POINTS
    }

    /// Punkt am Index
    pub fn get(&self, index: usize) -> Option<&MarkedPoint> {
        self.points.get(index)
    }

    /// Alle Punkte in Einfügereihenfolge
    pub fn points(&self) -> &[MarkedPoint] {
        &self.points
    }

    /// Abstände aufeinanderfolgender Paare (A–B, B–C, …).
    pub fn pairwise_distances(&self) -> impl Iterator<Item = PointDistance<'_>> + Clone {
        self.points.windows(2).map(|pair| PointDistance {
            from: &pair[0],
            to: &pair[1],
            distance: pair[0].position.distance(pair[1].position),
        })
    }
}
