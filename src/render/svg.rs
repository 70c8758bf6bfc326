use std::collections::HashSet;

use crate::network::segment::SegmentKey;
use crate::network::stop::{Stop, StopId};
use crate::network::transit_graph::TransitGraph;
use crate::render::{MapLayout, RenderError};
use crate::routing::Route;

const CANVAS_WIDTH: f32 = 1200.0;
const CANVAS_HEIGHT: f32 = 700.0;
const MARGIN: f32 = 110.0;

const STOP_RADIUS: f32 = 26.0;
const ROUTE_STOP_RADIUS: f32 = 29.0;

const ROAD_COLOR: &str = "#d3d3d3";
const ROAD_LABEL_COLOR: &str = "#808080";
const STOP_FILL: &str = "#87CEEB";
const ROUTE_ROAD_COLOR: &str = "#FF4500";
const ROUTE_STOP_FILL: &str = "#FFD700";

/// Builds the SVG document for a network map, optionally overlaying a
/// computed route: dashed gray roads with distance labels, sky-blue stop
/// circles with names, and the route drawn over them in orange-red with
/// gold stops.
pub struct RouteMapSvg<'a> {
    graph: &'a TransitGraph,
    layout: &'a MapLayout,
    title: String,
    route: Option<&'a Route>,
}

impl<'a> RouteMapSvg<'a> {
    pub fn new(graph: &'a TransitGraph, layout: &'a MapLayout) -> Self {
        Self {
            graph,
            layout,
            title: String::new(),
            route: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_route(mut self, route: &'a Route) -> Self {
        self.route = Some(route);
        self
    }

    pub fn to_svg(&self) -> Result<String, RenderError> {
        let (min, max) = self.layout.bounds();
        let route_segments: HashSet<SegmentKey> = self
            .route
            .map(|route| route.segment_keys().into_iter().collect())
            .unwrap_or_default();
        let route_stops: HashSet<StopId> = self
            .route
            .map(|route| route.stops.iter().map(|stop| stop.id).collect())
            .unwrap_or_default();

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" \
             viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\">\n"
        ));
        svg.push_str(&format!(
            "<rect width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" fill=\"white\"/>\n"
        ));

        // Roads first so stops draw over their endpoints.
        for (a, b, segment) in self.graph.segments() {
            let (x1, y1) = self.project(a, min, max)?;
            let (x2, y2) = self.project(b, min, max)?;
            svg.push_str(&format!(
                "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
                 stroke=\"{ROAD_COLOR}\" stroke-width=\"2\" stroke-dasharray=\"7 5\"/>\n"
            ));

            let label_x = (x1 + x2) / 2.0;
            let label_y = (y1 + y2) / 2.0 - 6.0;
            svg.push_str(&format!(
                "<text x=\"{label_x:.1}\" y=\"{label_y:.1}\" text-anchor=\"middle\" \
                 font-family=\"sans-serif\" font-size=\"12\" fill=\"{ROAD_LABEL_COLOR}\">{} m</text>\n",
                segment.distance_m
            ));
        }

        // Route overlay: the traversed segments again, thick and solid,
        // above every dashed road.
        for (a, b, _) in self.graph.segments() {
            if !route_segments.contains(&SegmentKey::new(a.id, b.id)) {
                continue;
            }
            let (x1, y1) = self.project(a, min, max)?;
            let (x2, y2) = self.project(b, min, max)?;
            svg.push_str(&format!(
                "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
                 stroke=\"{ROUTE_ROAD_COLOR}\" stroke-width=\"5\"/>\n"
            ));
        }

        for (_, stop) in self.graph.stops() {
            let (x, y) = self.project(stop, min, max)?;
            let on_route = route_stops.contains(&stop.id);
            let (fill, radius) = if on_route {
                (ROUTE_STOP_FILL, ROUTE_STOP_RADIUS)
            } else {
                (STOP_FILL, STOP_RADIUS)
            };
            svg.push_str(&format!(
                "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{radius}\" fill=\"{fill}\" \
                 stroke=\"black\" stroke-width=\"1.5\"/>\n"
            ));
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{y:.1}\" dy=\"0.35em\" text-anchor=\"middle\" \
                 font-family=\"sans-serif\" font-size=\"11\" font-weight=\"bold\">{}</text>\n",
                escape_text(&stop.name)
            ));
        }

        if !self.title.is_empty() {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"48\" text-anchor=\"middle\" font-family=\"sans-serif\" \
                 font-size=\"24\" font-weight=\"bold\">{}</text>\n",
                CANVAS_WIDTH / 2.0,
                escape_text(&self.title)
            ));
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn project(&self, stop: &Stop, min: [f32; 2], max: [f32; 2]) -> Result<(f32, f32), RenderError> {
        let position = self
            .layout
            .position(stop.id)
            .ok_or_else(|| RenderError::MissingPosition(stop.name.clone()))?;
        let x = MARGIN + (position[0] - min[0]) / (max[0] - min[0]) * (CANVAS_WIDTH - 2.0 * MARGIN);
        // Map y grows northward, SVG y grows downward.
        let y = CANVAS_HEIGHT - MARGIN
            - (position[1] - min[1]) / (max[1] - min[1]) * (CANVAS_HEIGHT - 2.0 * MARGIN);
        Ok((x, y))
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
