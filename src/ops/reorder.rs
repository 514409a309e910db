//! Drag-and-drop reorder geometry.
//!
//! The engine works on a purely visual order: given the pointer's vertical
//! coordinate and the bounding boxes of the rows currently on screen, it
//! decides which row the dragged one should be inserted before. The
//! authoritative collection is only resynchronized once, when the drag ends
//! (see `Action::Reorder`), so a still-in-progress drag never churns indices
//! in the store.

/// Bounding box of one displayed row, in the same vertical coordinate space
/// as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub top: f64,
    pub height: f64,
}

impl ItemRect {
    pub fn new(top: f64, height: f64) -> Self {
        ItemRect { top, height }
    }

    fn midpoint(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where the dragged row should land, in display-order positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Insert before the row currently displayed at this position
    Before(usize),
    /// Append after all rows
    End,
}

/// Compute the insertion point for the row at display position `dragged`.
///
/// A row is an insert-before candidate when the pointer sits above its
/// vertical midpoint (`offset = pointer_y - midpoint < 0`). Among candidates
/// the one with the largest offset wins: the nearest row whose midpoint the
/// pointer has not yet passed. Ties (degenerate zero-height rows) keep the
/// first candidate in display order. If the pointer is below every midpoint,
/// the dragged row goes to the end.
pub fn drop_target(pointer_y: f64, rects: &[ItemRect], dragged: usize) -> DropTarget {
    let mut best: Option<(usize, f64)> = None;
    for (pos, rect) in rects.iter().enumerate() {
        if pos == dragged {
            continue;
        }
        let offset = pointer_y - rect.midpoint();
        if offset < 0.0 {
            match best {
                Some((_, best_offset)) if offset <= best_offset => {}
                _ => best = Some((pos, offset)),
            }
        }
    }
    match best {
        Some((pos, _)) => DropTarget::Before(pos),
        None => DropTarget::End,
    }
}

/// Move the element at display position `from` to the drop target, mutating
/// only the visual order. `Before` positions refer to the order as it was
/// when the target was computed (i.e. before the removal).
pub fn reinsert<T>(display: &mut Vec<T>, from: usize, target: DropTarget) {
    if from >= display.len() {
        return;
    }
    let item = display.remove(from);
    match target {
        DropTarget::Before(pos) => {
            // Removing `from` shifts everything after it down one
            let insert_at = if pos > from { pos - 1 } else { pos };
            display.insert(insert_at.min(display.len()), item);
        }
        DropTarget::End => display.push(item),
    }
}

/// Rects for a list of uniform single-unit rows starting at the top of the
/// content area. This is what the TUI uses: one terminal row per task.
pub fn uniform_rects(count: usize) -> Vec<ItemRect> {
    (0..count).map(|i| ItemRect::new(i as f64, 1.0)).collect()
}
