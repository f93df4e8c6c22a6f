use glam::Vec2;
use std::collections::HashMap;
use taffy::prelude::*;
use tactile::{impl_add_event_listener, obj_upcast, Event, Obj};

use crate::{Bounds, Interaction, Widget};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("layout tree error: {0}")]
    Layout(#[from] taffy::TaffyError),
    #[error("node {0:?} is not part of the scene")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Node tree that places widgets and feeds them pointer phases.
///
/// A press is delivered to the topmost widget under the pointer. That widget
/// captures the pointer: moves, the release and a cancel go to it until the
/// press ends, wherever the pointer is.
pub struct Scene {
    layout: TaffyTree<()>,
    root: NodeId,
    widgets: HashMap<NodeId, Obj<dyn Widget>>,
    styles: HashMap<NodeId, Style>,
    bounds: HashMap<NodeId, Bounds>,
    captured: Option<NodeId>,
    ui_scale: f32,
    activated: Event<NodeId>,
}

impl Scene {
    pub fn new() -> Result<Self> {
        let mut layout = TaffyTree::new();
        let root = layout.new_leaf(Style::DEFAULT)?;
        Ok(Scene {
            layout,
            root,
            widgets: HashMap::new(),
            styles: HashMap::new(),
            bounds: HashMap::new(),
            captured: None,
            ui_scale: 1.,
            activated: Event::new(),
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn ui_scale(&self) -> f32 {
        self.ui_scale
    }
    pub fn set_ui_scale(&mut self, ui_scale: f32) {
        self.ui_scale = ui_scale;
        for widget in self.widgets.values() {
            widget.get_mut().control_mut().set_needs_layout();
        }
    }

    pub fn create_node(&mut self, style: Style) -> Result<NodeId> {
        Ok(self.layout.new_leaf(style)?)
    }
    pub fn create_widget<W: Widget>(&mut self, style: Style, widget: W) -> Result<(NodeId, Obj<W>)> {
        let node = self.create_node(style.clone())?;
        self.styles.insert(node, style);
        let widget = Obj::new(widget);
        self.widgets.insert(node, obj_upcast!(widget));
        Ok((node, widget))
    }
    pub fn destroy_node(&mut self, node: NodeId) -> Result<()> {
        self.release_capture_of(node);
        self.forget_bounds(node)?;
        self.layout.remove(node)?;
        self.widgets.remove(&node);
        self.styles.remove(&node);
        Ok(())
    }
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        Ok(self.layout.add_child(parent, child)?)
    }
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.release_capture_of(child);
        self.layout.remove_child(parent, child)?;
        self.forget_bounds(child)
    }

    /// Replaces a node's style. On widget nodes the layout hints are
    /// applied on top of it at the next layout pass.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> Result<()> {
        if let Some(base) = self.styles.get_mut(&node) {
            *base = style.clone();
            if let Some(widget) = self.widgets.get(&node) {
                widget.get_mut().control_mut().set_needs_layout();
            }
        }
        Ok(self.layout.set_style(node, style)?)
    }

    pub fn widget(&self, node: NodeId) -> Option<Obj<dyn Widget>> {
        self.widgets.get(&node).cloned()
    }
    /// Absolute bounds from the last layout pass.
    pub fn bounds(&self, node: NodeId) -> Option<Bounds> {
        self.bounds.get(&node).copied()
    }
    pub fn captured(&self) -> Option<NodeId> {
        self.captured
    }

    /// Resolves the layout hints of dirty widgets, lays out the tree for the
    /// given screen size and marks every widget laid out.
    pub fn layout(&mut self, width: f32, height: f32) -> Result<()> {
        for (node, widget) in self.widgets.iter() {
            let widget = widget.get();
            let control = widget.control();
            if control.needs_layout() {
                let mut style = match self.styles.get(node) {
                    Some(base) => base.clone(),
                    None => self.layout.style(*node)?.clone(),
                };
                control
                    .layout_hints()
                    .apply_to_style(&mut style, self.ui_scale);
                self.layout.set_style(*node, style)?;
            }
        }

        let mut root_style = self.layout.style(self.root)?.clone();
        root_style.size = Size::from_lengths(width, height);
        self.layout.set_style(self.root, root_style)?;
        self.layout.compute_layout(
            self.root,
            Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        )?;

        self.bounds.clear();
        self.record_bounds(self.root, Vec2::ZERO)?;
        for widget in self.widgets.values() {
            widget.get_mut().control_mut().layout_finished();
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, position: Vec2) -> Interaction {
        if let Some(node) = self.captured {
            log::warn!("Pointer pressed while {:?} holds the capture", node);
            self.pointer_cancel();
        }
        let Some(node) = self.hit_widget(self.root, position) else {
            return Interaction::Ignored;
        };
        let interaction = self.forward(node, |widget, bounds| widget.press_begin(position, bounds));
        if interaction == Interaction::Began {
            self.captured = Some(node);
        }
        interaction
    }
    pub fn pointer_move(&mut self, position: Vec2) -> Interaction {
        match self.captured {
            Some(node) => self.forward(node, |widget, bounds| widget.press_move(position, bounds)),
            None => Interaction::Ignored,
        }
    }
    pub fn pointer_up(&mut self, position: Vec2) -> Interaction {
        match self.captured.take() {
            Some(node) => self.forward(node, |widget, bounds| widget.press_end(position, bounds)),
            None => Interaction::Ignored,
        }
    }
    pub fn pointer_cancel(&mut self) -> Interaction {
        match self.captured.take() {
            Some(node) => self.forward(node, |widget, _| widget.press_cancel()),
            None => Interaction::Ignored,
        }
    }

    fn release_capture_of(&mut self, node: NodeId) {
        if self.captured == Some(node) {
            self.pointer_cancel();
        }
    }

    fn forward<F>(&mut self, node: NodeId, f: F) -> Interaction
    where
        F: FnOnce(&mut dyn Widget, &Bounds) -> Interaction,
    {
        let (Some(widget), Some(bounds)) = (self.widget(node), self.bounds(node)) else {
            return Interaction::Ignored;
        };
        let interaction = f(&mut *widget.get_mut(), &bounds);
        log::trace!("{:?} -> {:?}", node, interaction);
        if interaction == Interaction::Activated {
            self.activated.emit(&node);
        }
        interaction
    }

    fn forget_bounds(&mut self, node: NodeId) -> Result<()> {
        self.bounds.remove(&node);
        for child in self.layout.children(node)? {
            self.forget_bounds(child)?;
        }
        Ok(())
    }

    fn record_bounds(&mut self, node: NodeId, offset: Vec2) -> Result<()> {
        let layout = self.layout.layout(node)?;
        let origin = offset + Vec2::new(layout.location.x, layout.location.y);
        let size = Vec2::new(layout.size.width, layout.size.height);
        self.bounds.insert(node, Bounds { origin, size });
        for child in self.layout.children(node)? {
            self.record_bounds(child, origin)?;
        }
        Ok(())
    }

    /// Topmost widget under `position`. Children are tested even outside
    /// their parent's bounds, since a child may overflow its parent.
    fn hit_widget(&self, node: NodeId, position: Vec2) -> Option<NodeId> {
        let children = self.layout.children(node).ok()?;
        for child in children.into_iter().rev() {
            if let Some(hit_node) = self.hit_widget(child, position) {
                return Some(hit_node);
            }
        }
        let bounds = self.bounds.get(&node)?;
        if self.widgets.contains_key(&node) && crate::HitTest::contains_point(bounds, position) {
            Some(node)
        } else {
            None
        }
    }
}

impl_add_event_listener!(Scene, activated, NodeId, add_activated_listener);
