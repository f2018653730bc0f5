//! Pointer target shared between input handlers and the simulation
//!
//! Event handlers overwrite the target whenever the pointer moves; the frame
//! loop samples it once per tick. Last write wins, nothing is queued.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::consts::*;

/// Create a connected writer/reader pair, starting at `initial`
pub fn pointer_channel(initial: Vec2) -> (PointerWriter, PointerReader) {
    let cell = Rc::new(Cell::new(initial));
    (
        PointerWriter {
            cell: Rc::clone(&cell),
        },
        PointerReader { cell },
    )
}

/// Write half, owned by the input collaborator
#[derive(Debug)]
pub struct PointerWriter {
    cell: Rc<Cell<Vec2>>,
}

impl PointerWriter {
    /// Record the pointer in canvas-local coordinates
    pub fn set(&self, pos: Vec2) {
        self.cell.set(pos);
    }

    /// Record a client-space pointer position, mapping it through the
    /// canvas's on-screen rectangle into logical canvas space
    pub fn set_from_client(&self, client: Vec2, rect_origin: Vec2, rect_size: Vec2) {
        if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
            return;
        }
        let scale = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) / rect_size;
        self.set((client - rect_origin) * scale);
    }
}

/// Read half, sampled by the frame loop
#[derive(Debug)]
pub struct PointerReader {
    cell: Rc<Cell<Vec2>>,
}

impl PointerReader {
    /// Latest pointer target
    pub fn sample(&self) -> Vec2 {
        self.cell.get()
    }
}
