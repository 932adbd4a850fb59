//! Animated lakeside landscape.
//!
//! A sun with rotating rays, drifting clouds, a house mirrored in the lake
//! and a row of flowers. Everything is drawn with the core rasterizers and
//! placed with the transform functions; all layout and colour values come
//! from [`MiniSceneConfig`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::raster::Painter;
use crate::surface::Surface;
use crate::transform::{reflect, rotate, scale, translate};
use crate::types::{Colour, Point};

/// Colours used by the landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniScenePalette {
    pub sky: Colour,
    pub sun: Colour,
    pub sun_rim: Colour,
    pub cloud: Colour,
    pub ground: Colour,
    pub lake: Colour,
    pub wall: Colour,
    pub roof: Colour,
    pub door: Colour,
    pub window: Colour,
    pub reflection: Colour,
    pub stem: Colour,
    pub stem_reflection: Colour,
    pub petals: Colour,
    pub flower_centre: Colour,
    pub petal_reflection: Colour,
}

impl Default for MiniScenePalette {
    fn default() -> Self {
        Self {
            sky: Colour::rgb(173, 216, 230),
            sun: Colour::rgb(255, 255, 0),
            sun_rim: Colour::rgb(255, 165, 0),
            cloud: Colour::WHITE,
            ground: Colour::rgb(0, 128, 0),
            lake: Colour::rgb(70, 130, 180),
            wall: Colour::rgb(139, 69, 19),
            roof: Colour::rgb(139, 0, 0),
            door: Colour::rgb(165, 42, 42),
            window: Colour::rgb(173, 216, 230),
            reflection: Colour::rgb(169, 169, 169),
            stem: Colour::rgb(0, 128, 0),
            stem_reflection: Colour::rgb(0, 100, 0),
            petals: Colour::rgb(255, 192, 203),
            flower_centre: Colour::rgb(255, 255, 0),
            petal_reflection: Colour::rgb(128, 128, 128),
        }
    }
}

/// A cluster of overlapping discs drawn as one cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub origin: Point,
    /// `(offset from origin, radius)` per disc.
    pub puffs: Vec<(Point, u32)>,
}

/// Layout of the landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniSceneConfig {
    pub width: u32,
    pub height: u32,
    /// Shoreline; reflections mirror across this row.
    pub water_y: f64,
    /// Where the lake begins on the shoreline.
    pub shore_x: f64,
    pub sun_center: Point,
    pub sun_radius: u32,
    pub ray_count: u32,
    pub ray_length: f64,
    pub clouds: Vec<Cloud>,
    /// House parts scale about this point.
    pub house_pivot: Point,
    pub house_body: Vec<Point>,
    pub house_roof: Vec<Point>,
    pub house_door: Vec<Point>,
    pub house_window: Vec<Point>,
    pub flowers: Vec<Point>,
    pub stem_length: f64,
    pub flower_radius: u32,
    pub palette: MiniScenePalette,
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

impl Default for MiniSceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            water_y: 480.0,
            shore_x: 300.0,
            sun_center: Point::new(650.0, 80.0),
            sun_radius: 30,
            ray_count: 12,
            ray_length: 50.0,
            clouds: vec![
                Cloud {
                    origin: Point::new(150.0, 100.0),
                    puffs: vec![
                        (Point::new(0.0, 0.0), 20),
                        (Point::new(25.0, 0.0), 25),
                        (Point::new(50.0, 0.0), 20),
                    ],
                },
                Cloud {
                    origin: Point::new(400.0, 120.0),
                    puffs: vec![
                        (Point::new(0.0, 0.0), 18),
                        (Point::new(22.0, 0.0), 22),
                        (Point::new(45.0, 0.0), 18),
                    ],
                },
            ],
            house_pivot: Point::new(200.0, 480.0),
            house_body: pts(&[(150.0, 380.0), (250.0, 380.0), (250.0, 480.0), (150.0, 480.0)]),
            house_roof: pts(&[(140.0, 380.0), (200.0, 310.0), (260.0, 380.0)]),
            house_door: pts(&[(180.0, 430.0), (220.0, 430.0), (220.0, 480.0), (180.0, 480.0)]),
            house_window: pts(&[(160.0, 400.0), (185.0, 400.0), (185.0, 420.0), (160.0, 420.0)]),
            flowers: pts(&[(330.0, 460.0), (380.0, 465.0), (430.0, 458.0), (480.0, 462.0)]),
            stem_length: 30.0,
            flower_radius: 8,
            palette: MiniScenePalette::default(),
        }
    }
}

const MAX_SCALE: f64 = 2.0;
const SCALE_STEP: f64 = 0.1;
const CLOUD_RESTART: f64 = -100.0;

/// The landscape plus its per-frame animation state.
#[derive(Debug, Clone)]
pub struct MiniScene {
    config: MiniSceneConfig,
    cloud_offset: f64,
    sun_rotation: f64,
    scale_factor: f64,
}

impl MiniScene {
    pub fn new(config: MiniSceneConfig) -> Self {
        Self {
            config,
            cloud_offset: 0.0,
            sun_rotation: 0.0,
            scale_factor: 1.0,
        }
    }

    pub fn config(&self) -> &MiniSceneConfig {
        &self.config
    }

    pub fn cloud_offset(&self) -> f64 {
        self.cloud_offset
    }

    pub fn sun_rotation(&self) -> f64 {
        self.sun_rotation
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Step the animation by one tick: clouds drift right and wrap back in
    /// from the left, the sun's rays turn by two degrees.
    pub fn advance(&mut self) {
        self.cloud_offset += 1.0;
        if self.cloud_offset > self.config.width as f64 {
            self.cloud_offset = CLOUD_RESTART;
        }

        self.sun_rotation += 2.0;
        if self.sun_rotation >= 360.0 {
            self.sun_rotation = 0.0;
        }
    }

    /// Grow the house and flowers by one step, up to double size.
    pub fn zoom_in(&mut self) {
        self.scale_factor = (self.scale_factor + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn reset_scale(&mut self) {
        self.scale_factor = 1.0;
    }

    /// Clear the surface, paint the current frame and present it.
    pub fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear();
        self.paint(&mut Painter::new(&mut *surface));
        surface.present()
    }

    /// Paint the current frame without clearing or presenting.
    pub fn paint<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        self.paint_sun(painter);
        self.paint_clouds(painter);
        self.paint_land_and_water(painter);
        self.paint_house(painter);
        self.paint_flowers(painter);
    }

    fn paint_sun<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        let cfg = &self.config;
        let pal = &cfg.palette;
        let c = cfg.sun_center;
        let r = cfg.sun_radius as f64;

        painter.fill_circle(c, cfg.sun_radius, pal.sun);
        painter.circle(c, cfg.sun_radius, pal.sun_rim);

        // One ray pointing right, rotated into each position.
        let ray = [Point::new(c.x + r, c.y), Point::new(c.x + r + cfg.ray_length, c.y)];
        let spacing = 360.0 / cfg.ray_count.max(1) as f64;

        for i in 0..cfg.ray_count {
            let angle = spacing * i as f64 + self.sun_rotation;
            let turned = rotate(&ray, angle, c.x, c.y);
            painter.line(turned[0], turned[1], pal.sun_rim);
        }
    }

    fn paint_clouds<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        for cloud in &self.config.clouds {
            let origin = translate(&[cloud.origin], self.cloud_offset, 0.0)[0];
            for (offset, radius) in &cloud.puffs {
                let centre = Point::new(origin.x + offset.x, origin.y + offset.y);
                painter.fill_circle(centre, *radius, self.config.palette.cloud);
            }
        }
    }

    fn paint_land_and_water<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        let cfg = &self.config;
        let (w, h) = (cfg.width as f64, cfg.height as f64);
        let (shore, water) = (cfg.shore_x, cfg.water_y);

        let ground = pts(&[(0.0, water), (shore, water), (shore, h), (0.0, h)]);
        let lake = pts(&[(shore, water), (w, water), (w, h), (shore, h)]);

        painter.fill_polygon(&ground, cfg.palette.ground);
        painter.fill_polygon(&lake, cfg.palette.lake);
    }

    fn paint_house<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        let cfg = &self.config;
        let pal = &cfg.palette;
        let (s, pivot) = (self.scale_factor, cfg.house_pivot);
        let grow = |part: &[Point]| scale(part, s, s, pivot.x, pivot.y);

        let body = grow(&cfg.house_body);
        let roof = grow(&cfg.house_roof);
        let door = grow(&cfg.house_door);
        let window = grow(&cfg.house_window);

        painter.fill_polygon(&body, pal.wall);
        painter.fill_polygon(&roof, pal.roof);
        painter.fill_polygon(&door, pal.door);
        painter.fill_polygon(&window, pal.window);

        for part in [&body, &roof, &door] {
            painter.fill_polygon(&reflect(part, cfg.water_y), pal.reflection);
        }
    }

    fn paint_flowers<S: Surface + ?Sized>(&self, painter: &mut Painter<'_, S>) {
        let cfg = &self.config;
        let pal = &cfg.palette;
        let s = self.scale_factor;
        let radius = (cfg.flower_radius as f64 * s) as u32;

        for &base in &cfg.flowers {
            let stem = scale(
                &[base, Point::new(base.x, base.y + cfg.stem_length)],
                s,
                s,
                base.x,
                base.y,
            );
            painter.line(stem[0], stem[1], pal.stem);
            painter.fill_circle(base, radius, pal.petals);
            painter.fill_circle(base, radius / 2, pal.flower_centre);

            let mirrored = reflect(&[stem[0], stem[1]], cfg.water_y);
            painter.line(mirrored[0], mirrored[1], pal.stem_reflection);
            painter.fill_circle(mirrored[0], radius, pal.petal_reflection);
        }
    }
}

impl Default for MiniScene {
    fn default() -> Self {
        Self::new(MiniSceneConfig::default())
    }
}
