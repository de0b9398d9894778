//! The quest log dialog.
//!
//! Lists the player's displayable quests in a paged column, shows the
//! selected quest's description, and marks its location on a minimap.
//!
//! # Event flow
//!
//! Child widgets report through closures that post `Message`s into the
//! dialog's channel. `handle_event` dispatches an input event to the children
//! and then applies every queued message, so by the time it returns the
//! dialog is in its final state for that event.

use std::sync::mpsc::{self, Receiver, Sender};

use glam::IVec2;
use log::{debug, info, trace, warn};

use crate::assets::AssetCatalog;
use crate::config::QuestLogConfig;
use crate::error::QuestLogError;
use crate::geometry::Rect;
use crate::input::{InputEvent, KeyCode, dispatch};
use crate::minimap::{AdventureMap, MarkerStyle, Minimap, QuestMinimap};
use crate::quest::{Component, QuestInfo};
use crate::ui::quest::QuestLabel;
use crate::ui::widgets::{Button, Slider, TextBox, WindowFrame};
use crate::ui::{Alignment, Color, DrawList, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Message {
    /// A label was clicked: quest index into the list, label slot.
    Select { quest: usize, slot: usize },
    SliderMoved(usize),
    Close,
}

pub struct QuestLog<'a> {
    config: QuestLogConfig,
    frame: WindowFrame,
    quests: &'a [QuestInfo<'a>],
    labels: Vec<QuestLabel>,
    description: TextBox,
    minimap: QuestMinimap<'a>,
    ok: Button,
    slider: Slider,
    /// Label slot of the selection, for the highlight frame.
    selected_slot: usize,
    /// Index into `quests` of the selection.
    current_quest: Option<usize>,
    reward_components: Vec<Component>,
    page_offset: usize,
    tx: Sender<Message>,
    rx: Receiver<Message>,
    redraw_requested: bool,
    closed: bool,
}

impl<'a> QuestLog<'a> {
    /// Build the dialog over `quests`.
    ///
    /// One label is created per quest whose mission type has text. The last
    /// quest that is not complete ends up selected. When more labels exist
    /// than fit on one page, the list starts scrolled to the bottom;
    /// otherwise the scrollbar is blocked.
    pub fn new(
        quests: &'a [QuestInfo<'a>],
        minimap: Box<dyn Minimap + 'a>,
        adventure_map: Box<dyn AdventureMap + 'a>,
        assets: &dyn AssetCatalog,
        config: QuestLogConfig,
    ) -> Result<Self, QuestLogError> {
        config.validate()?;
        let (tx, rx) = mpsc::channel();

        let frame = WindowFrame::new(config.window_rect(), config.background.clone());
        let origin = frame.origin();

        let marker = MarkerStyle {
            asset: config.marker_asset.clone(),
            frame: config.marker_frame,
            size: frame_size(assets, &config.marker_asset, config.marker_frame),
        };
        let minimap = QuestMinimap::new(minimap, adventure_map, marker);

        let description = TextBox::new(
            config.description_rect.translated(origin),
            config.description_font,
            Alignment::TopLeft,
            Color::WHITE,
        );

        let ok_size = frame_size(assets, &config.ok_asset, 0);
        let mut ok = Button::new(Rect::from_pos_size(origin + config.ok_pos, ok_size), config.ok_asset.clone())
            .with_hotkey(KeyCode::Enter);
        let close_tx = tx.clone();
        ok.set_callback(move || {
            let _ = close_tx.send(Message::Close);
        });

        // Replaced once all labels exist.
        let slider = Slider::new(origin + config.slider_pos, config.slider_length, config.page_size, 0);

        let mut log = Self {
            config,
            frame,
            quests,
            labels: Vec::new(),
            description,
            minimap,
            ok,
            slider,
            selected_slot: 0,
            current_quest: None,
            reward_components: Vec::new(),
            page_offset: 0,
            tx,
            rx,
            redraw_requested: false,
            closed: false,
        };

        for (i, info) in quests.iter().enumerate() {
            if !info.quest.mission_type().has_text() {
                continue;
            }
            let slot = log.labels.len();
            let mut label = QuestLabel::new(
                Rect::from_pos_size(origin + log.config.label_origin, log.config.label_size),
                log.config.label_font,
                Alignment::TopLeft,
                log.config.label_color,
                info.label_text(),
            );
            let select_tx = log.tx.clone();
            label.set_callback(move || {
                let _ = select_tx.send(Message::Select { quest: i, slot });
            });
            log.labels.push(label);

            if !info.is_complete() {
                log.select_quest(i, slot);
            }
        }
        log.recreate_quest_list(0);

        let slider_tx = log.tx.clone();
        log.slider = Slider::new(origin + log.config.slider_pos, log.config.slider_length, log.config.page_size, log.labels.len())
            .with_scroll_area(log.config.label_column().translated(origin))
            .with_callback(move |offset| {
                let _ = slider_tx.send(Message::SliderMoved(offset));
            });
        if log.labels.len() > log.config.page_size {
            log.slider.move_to_max();
        } else {
            log.slider.block(true);
        }
        log.process_messages();

        debug!(
            "quest log: {} of {} quests listed, selected {:?}",
            log.labels.len(),
            quests.len(),
            log.current_quest
        );
        Ok(log)
    }

    /// Select `quest` (index into the quest list) whose label sits in `slot`.
    ///
    /// Shows the quest's first-visit text, scrolled to the top, and moves the
    /// minimap marker to it. Out-of-range indices are ignored.
    pub fn select_quest(&mut self, quest: usize, slot: usize) {
        let quests = self.quests;
        let Some(info) = quests.get(quest) else {
            warn!("quest log: ignoring selection of quest {quest}, only {} quests", quests.len());
            return;
        };
        self.selected_slot = slot;
        self.current_quest = Some(quest);

        let visit = info.quest.visit_text(true);
        self.description.scroll_to_top();
        self.description.set_text(visit.text);
        // Components are kept for callers but not drawn by this dialog.
        self.reward_components = visit.components;
        debug!(
            "quest log: selected quest {quest} in slot {slot} ({} components)",
            self.reward_components.len()
        );

        self.minimap.set_quest(info);
        self.redraw_requested = true;
    }

    /// Lay out the labels for a page starting at label `offset`: labels on
    /// the page are enabled and stacked from the top of the list column,
    /// every other label is disabled.
    pub fn recreate_quest_list(&mut self, offset: usize) {
        let origin = self.frame.origin();
        let page = offset..offset.saturating_add(self.config.page_size);
        let first_row_y = i64::from(origin.y + self.config.label_origin.y);
        let offset_rows = i64::try_from(offset).unwrap_or(i64::MAX);
        for (i, label) in self.labels.iter_mut().enumerate() {
            // Rows far outside the column saturate at the edge of the pixel grid.
            let row = (i as i64).saturating_sub(offset_rows);
            let y = first_row_y.saturating_add(row.saturating_mul(i64::from(self.config.row_height)));
            let y = y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            let pos = IVec2::new(origin.x + self.config.label_origin.x, y);
            label.set_rect(Rect::from_pos_size(pos, self.config.label_size));
            label.set_enabled(page.contains(&i));
        }
        self.page_offset = offset;
        trace!("quest log: page offset {offset}");
        self.minimap.update();
    }

    pub fn slider_moved(&mut self, offset: usize) {
        self.recreate_quest_list(offset);
        self.redraw_requested = true;
    }

    /// Route one input event to the dialog's widgets and apply the result.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if self.closed {
            return;
        }
        dispatch(&mut self.ok, event);
        dispatch(&mut self.slider, event);
        for label in &mut self.labels {
            dispatch(label, event);
        }
        dispatch(&mut self.description, event);
        dispatch(&mut self.minimap, event);
        self.process_messages();
    }

    fn process_messages(&mut self) {
        loop {
            let msg = match self.rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => break,
            };
            match msg {
                Message::Select { quest, slot } => self.select_quest(quest, slot),
                Message::SliderMoved(offset) => self.slider_moved(offset),
                Message::Close => self.close(),
            }
        }
    }

    pub fn close(&mut self) {
        if !self.closed {
            info!("quest log closed");
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool { self.closed }

    /// Return whether a redraw was requested since the last call, and reset it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn labels(&self) -> &[QuestLabel] { &self.labels }
    pub fn description(&self) -> &TextBox { &self.description }
    pub fn minimap(&self) -> &QuestMinimap<'a> { &self.minimap }
    pub fn slider(&self) -> &Slider { &self.slider }
    pub fn ok_button(&self) -> &Button { &self.ok }
    pub fn rect(&self) -> Rect { self.frame.rect() }
    pub fn page_offset(&self) -> usize { self.page_offset }
    pub fn selected_slot(&self) -> usize { self.selected_slot }

    /// The selected quest, if any.
    pub fn current_quest(&self) -> Option<&'a QuestInfo<'a>> {
        let quests = self.quests;
        self.current_quest.and_then(|i| quests.get(i))
    }

    /// Index into the quest list of the selected quest.
    pub fn current_quest_index(&self) -> Option<usize> { self.current_quest }

    /// Reward/requirement components of the selected quest's visit text.
    pub fn reward_components(&self) -> &[Component] { &self.reward_components }

    /// Rectangle of the selection frame, if a quest is selected and its label
    /// is on screen.
    pub fn highlight_rect(&self) -> Option<Rect> {
        // The slot index defaults to 0, so nothing is framed until a quest is selected.
        self.current_quest?;
        let label = self.labels.get(self.selected_slot).filter(|l| l.is_enabled())?;
        let mut rect = label.rect().around();
        // Sit on top of the artwork's border rather than inside it.
        rect.x -= 2;
        rect.w += 2;
        Some(rect)
    }

    pub fn paint(&self, out: &mut DrawList) {
        self.frame.paint(out);
        self.ok.paint(out);
        self.slider.paint(out);
        for label in &self.labels {
            label.paint(out);
        }
        if let Some(rect) = self.highlight_rect() {
            out.border(rect, self.config.highlight_color);
        }
        self.description.paint(out);
        self.minimap.paint(out);
    }
}

fn frame_size(assets: &dyn AssetCatalog, name: &str, frame: usize) -> IVec2 {
    assets.frame_size(name, frame).unwrap_or_else(|| {
        warn!("quest log: no size for {name} frame {frame}, using zero");
        IVec2::ZERO
    })
}
