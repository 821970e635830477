//! Abhängigkeitsgraph für die synchrone Neuberechnung abgeleiteter Werte.
//!
//! Kleiner, statischer DAG: Zellen werden einmalig angelegt, Kanten einmalig
//! verdrahtet (`seal` friert die topologische Ordnung ein), danach gibt es
//! nur noch Invalidieren und Abarbeiten. Kein allgemeines Binding-Framework;
//! der Graph der Kurve hat dreizehn Zellen und ändert sich nie.

use std::collections::VecDeque;

/// Index einer Zelle im Graphen.
pub type CellId = usize;

/// Push-basierter Abhängigkeitsgraph mit topologischer Abarbeitung.
///
/// Eine Änderung an einer Quelle invalidiert alle transitiv Abhängigen;
/// `drain_dirty` liefert die veralteten Zellen in einer Ordnung, in der
/// jede Zelle erst nach allen ihren Quellen erscheint.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Abhängige je Zelle (Kante Quelle → Abhängiger).
    dependents: Vec<Vec<CellId>>,
    /// Topologische Ordnung aller Zellen, von `seal` berechnet.
    topo_order: Vec<CellId>,
    dirty: Vec<bool>,
    recompute_counts: Vec<u64>,
}

impl DependencyGraph {
    /// Erstellt einen Graphen mit `cell_count` Zellen und ohne Kanten.
    pub fn new(cell_count: usize) -> Self {
        Self {
            dependents: vec![Vec::new(); cell_count],
            topo_order: Vec::new(),
            dirty: vec![false; cell_count],
            recompute_counts: vec![0; cell_count],
        }
    }

    /// Anzahl der Zellen.
    pub fn cell_count(&self) -> usize {
        self.dependents.len()
    }

    /// Verdrahtet eine Kante: Änderungen an `source` invalidieren `dependent`.
    ///
    /// Nur vor `seal` aufrufen; der Graph ist danach eingefroren.
    pub fn add_dependency(&mut self, source: CellId, dependent: CellId) {
        self.dependents[source].push(dependent);
    }

    /// Friert den Graphen ein und berechnet die topologische Ordnung (Kahn).
    pub fn seal(&mut self) {
        let cell_count = self.cell_count();
        let mut in_degree = vec![0usize; cell_count];
        for dependents in &self.dependents {
            for &dependent in dependents {
                in_degree[dependent] += 1;
            }
        }

        let mut queue: VecDeque<CellId> = (0..cell_count).filter(|&c| in_degree[c] == 0).collect();
        let mut order = Vec::with_capacity(cell_count);
        while let Some(cell) = queue.pop_front() {
            order.push(cell);
            for i in 0..self.dependents[cell].len() {
                let dependent = self.dependents[cell][i];
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        debug_assert_eq!(
            order.len(),
            cell_count,
            "Abhängigkeitsgraph enthält einen Zyklus"
        );
        self.topo_order = order;
    }

    /// Markiert eine Zelle und alle transitiv Abhängigen als veraltet.
    pub fn invalidate(&mut self, cell: CellId) {
        if self.dirty[cell] {
            return;
        }
        self.dirty[cell] = true;
        let mut stack = vec![cell];
        while let Some(current) = stack.pop() {
            for i in 0..self.dependents[current].len() {
                let dependent = self.dependents[current][i];
                if !self.dirty[dependent] {
                    self.dirty[dependent] = true;
                    stack.push(dependent);
                }
            }
        }
    }

    /// Ob eine Zelle aktuell als veraltet markiert ist.
    pub fn is_dirty(&self, cell: CellId) -> bool {
        self.dirty[cell]
    }

    /// Liefert alle veralteten Zellen in topologischer Ordnung und setzt
    /// ihre Dirty-Flags zurück. Der Aufrufer berechnet die Zellen in genau
    /// dieser Reihenfolge neu; jede gelieferte Zelle zählt einen Recompute
    /// hoch.
    pub fn drain_dirty(&mut self) -> Vec<CellId> {
        let mut cells = Vec::new();
        for i in 0..self.topo_order.len() {
            let cell = self.topo_order[i];
            if self.dirty[cell] {
                self.dirty[cell] = false;
                self.recompute_counts[cell] += 1;
                cells.push(cell);
            }
        }
        cells
    }

    /// Wie oft eine Zelle bisher neu berechnet wurde.
    pub fn recompute_count(&self, cell: CellId) -> u64 {
        self.recompute_counts[cell]
    }
}
