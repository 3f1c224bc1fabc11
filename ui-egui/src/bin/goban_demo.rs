// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive goban demo.
//!
//! Run with: cargo run --bin goban_demo

use std::collections::HashSet;
use std::sync::Arc;

use eframe::{App as EframeApp, Frame, NativeOptions};
use egui::Context;

use goban_core::{
    BoardState, Color, GhostMap, GhostStone, Heat, HeatOverlay, Marker, MarkerKind, MarkerMap,
    PaintMap, Vertex,
};
use goban_ui_egui::{BoardEvent, BoardProps, BoardWidget};

struct DemoApp {
    widget: BoardWidget,
    board: Arc<BoardState>,
    next_color: Color,
    markers: MarkerMap,
    ghosts: GhostMap,
    paint: PaintMap,
    heat: HeatOverlay,
    selected: HashSet<Vertex>,
    show_coordinates: bool,
    fuzzy_placement: bool,
    animate_placement: bool,
    busy: bool,
    events_tx: crossbeam_channel::Sender<BoardEvent>,
    events_rx: crossbeam_channel::Receiver<BoardEvent>,
    event_log: Vec<String>,
}

impl DemoApp {
    fn new() -> Self {
        let board = Arc::new(
            BoardState::new(19, 19)
                .with_stone(Vertex::new(3, 3), Color::Black)
                .with_stone(Vertex::new(15, 15), Color::White),
        );

        let mut markers = MarkerMap::new();
        markers.insert(Vertex::new(3, 3), Marker::new(MarkerKind::Circle));
        markers.insert(Vertex::new(9, 9), Marker::label("A"));

        let mut ghosts = GhostMap::new();
        ghosts.insert(Vertex::new(16, 3), GhostStone::new(Color::Black));

        let mut paint = PaintMap::new();
        for x in 0..4u16 {
            for y in 0..4u16 {
                paint.insert(Vertex::new(x, y), 0.6);
                paint.insert(Vertex::new(15 + x, 15 + y), -0.6);
            }
        }

        let mut heat = HeatOverlay::new();
        heat.insert(Vertex::new(16, 3), Heat::new(0.9));
        heat.insert(Vertex::new(3, 15), Heat::new(0.5));

        let (events_tx, events_rx) = crossbeam_channel::unbounded();

        Self {
            widget: BoardWidget::new(),
            board,
            next_color: Color::Black,
            markers,
            ghosts,
            paint,
            heat,
            selected: HashSet::from([Vertex::new(10, 10), Vertex::new(10, 11)]),
            show_coordinates: true,
            fuzzy_placement: true,
            animate_placement: true,
            busy: false,
            events_tx,
            events_rx,
            event_log: Vec::new(),
        }
    }

    fn place_stone(&mut self, vertex: Vertex) {
        if self.board.stone_at(vertex).is_some() {
            return;
        }
        // New Arc identity on purpose: that is what requests animation
        let next = Arc::new((*self.board).clone().with_stone(vertex, self.next_color));
        self.board = next;
        self.next_color = self.next_color.opposite();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.event_log.push(format!("{event:?}"));
            if self.event_log.len() > 12 {
                self.event_log.remove(0);
            }
        }
    }
}

impl EframeApp for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::SidePanel::right("controls").show(ctx, |ui| {
            ui.heading("Goban demo");
            ui.checkbox(&mut self.show_coordinates, "Coordinates");
            ui.checkbox(&mut self.fuzzy_placement, "Fuzzy placement");
            ui.checkbox(&mut self.animate_placement, "Animate placement");
            ui.checkbox(&mut self.busy, "Busy");
            ui.separator();
            ui.label("Events:");
            for line in &self.event_log {
                ui.monospace(line);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let events_tx = self.events_tx.clone();
            let props = BoardProps {
                markers: Some(&self.markers),
                ghosts: Some(&self.ghosts),
                paint: Some(&self.paint),
                heat: Some(&self.heat),
                selected: Some(&self.selected),
                show_coordinates: self.show_coordinates,
                fuzzy_placement: self.fuzzy_placement,
                animate_placement: self.animate_placement,
                busy: self.busy,
                events: Some(&events_tx),
                ..BoardProps::new(&self.board)
            };

            let response = self.widget.show(ui, &props);
            if let Some(vertex) = response.clicked {
                self.place_stone(vertex);
            }
        });

        self.drain_events();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 780.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Goban Demo",
        options,
        Box::new(|_cc| Box::new(DemoApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {e}"))
}
