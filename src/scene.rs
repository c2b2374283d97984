//! Headless model of the interactive pane.
//!
//! A [`Scene`] owns the live [`PointSet`] and turns every click into a fresh
//! [`Frame`]: one circle per point and one line per hull edge. Drawing the frame
//! is up to the caller.
use std::path::Path;

use crate::data::{Hull, Point, PointSet};
use crate::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
  /// Adds a point.
  Primary,
  /// Removes the point nearest to the click.
  Secondary,
  Middle,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
  pub position: Point,
  pub button: MouseButton,
}

impl Click {
  pub fn new(x: f64, y: f64, button: MouseButton) -> Click {
    Click {
      position: Point::new([x, y]),
      button,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
  pub width: f64,
  pub height: f64,
  pub point_radius: f64,
}

impl Default for SceneConfig {
  fn default() -> Self {
    SceneConfig {
      width: 500.0,
      height: 500.0,
      point_radius: 5.0,
    }
  }
}

impl SceneConfig {
  #[must_use]
  pub fn with_size(mut self, width: f64, height: f64) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  #[must_use]
  pub fn with_point_radius(mut self, point_radius: f64) -> Self {
    self.point_radius = point_radius;
    self
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
  pub start: Point,
  pub end: Point,
}

/// Everything that should be on screen after the latest change.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
  /// One per point, in insertion order.
  pub circles: Vec<Circle>,
  pub hull: Hull,
  /// Hull edges. Empty unless the hull has more than one vertex.
  pub lines: Vec<Line>,
}

impl Frame {
  fn draw(config: &SceneConfig, points: &PointSet) -> Frame {
    let circles = points
      .iter()
      .map(|point| Circle {
        center: *point,
        radius: config.point_radius,
      })
      .collect();

    let hull = points.convex_hull();
    log::debug!("convex hull points: {}", hull.len());
    for vertex in hull.iter() {
      log::debug!("  {}", vertex);
    }

    let lines = hull
      .edges()
      .map(|(start, end)| {
        log::debug!("line drawn from {} to {}", start, end);
        Line {
          start: *start,
          end: *end,
        }
      })
      .collect();

    Frame {
      circles,
      hull,
      lines,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Scene {
  config: SceneConfig,
  points: PointSet,
  frame: Frame,
}

impl Scene {
  pub fn new<I>(config: SceneConfig, initial_points: I) -> Scene
  where
    I: IntoIterator<Item = Point>,
  {
    let points: PointSet = initial_points.into_iter().collect();
    let frame = Frame::draw(&config, &points);
    Scene {
      config,
      points,
      frame,
    }
  }

  /// Start from the points stored at `path`, or from an empty scene if they
  /// cannot be loaded.
  pub fn load<P: AsRef<Path>>(config: SceneConfig, path: P) -> Scene {
    let path = path.as_ref();
    match io::load_points(path) {
      Ok(points) => Scene::new(config, points),
      Err(err) => {
        log::warn!("starting without points from {}: {}", path.display(), err);
        Scene::new(config, Vec::new())
      }
    }
  }

  /// Apply a click and redraw.
  pub fn handle_click(&mut self, click: Click) -> &Frame {
    match click.button {
      MouseButton::Primary => self.points.insert(click.position),
      MouseButton::Secondary => {
        self.points.remove_nearest(&click.position);
      }
      MouseButton::Middle | MouseButton::Other => {}
    }
    self.redraw()
  }

  pub fn redraw(&mut self) -> &Frame {
    self.frame = Frame::draw(&self.config, &self.points);
    &self.frame
  }

  pub fn frame(&self) -> &Frame {
    &self.frame
  }

  pub fn points(&self) -> &PointSet {
    &self.points
  }

  pub fn config(&self) -> &SceneConfig {
    &self.config
  }
}
