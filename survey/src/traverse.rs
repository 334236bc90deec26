use geom::Pt2D;

use crate::SurveyLine;

/// The ordered projected vertices visited by walking survey lines from a starting point. The
/// starting point is always included, so a traverse over n lines has n + 1 vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Traverse {
    pts: Vec<Pt2D>,
}

impl Traverse {
    pub fn walk(start: Pt2D, lines: &[SurveyLine]) -> Traverse {
        let mut pts = Vec::with_capacity(lines.len() + 1);
        let mut current = start;
        pts.push(current);
        for line in lines {
            current = current.project_away(line.distance, line.bearing.to_azimuth());
            pts.push(current);
        }
        Traverse { pts }
    }

    pub fn points(&self) -> &[Pt2D] {
        &self.pts
    }

    /// Where the traverse actually ended up, before any closure correction.
    pub fn terminus(&self) -> Pt2D {
        *self.pts.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::Distance;

    fn lines(raw: &[&str]) -> Vec<SurveyLine> {
        raw.iter().map(|l| SurveyLine::parse(l).unwrap()).collect()
    }

    #[test]
    fn zero_lines_is_just_the_start() {
        let start = Pt2D::new(500_000.0, 1_600_000.0);
        let traverse = Traverse::walk(start, &[]);
        assert_eq!(traverse.points(), &[start]);
        assert_eq!(traverse.terminus(), start);
    }

    #[test]
    fn due_north_leg() {
        let traverse = Traverse::walk(Pt2D::new(0.0, 0.0), &lines(&["N 00D 00′ E;123.4"]));
        let terminus = traverse.terminus();
        assert!(terminus.easting().abs() < 1e-9);
        assert!((terminus.northing() - 123.4).abs() < 1e-9);
    }

    #[test]
    fn square_closes() {
        let start = Pt2D::new(1000.0, 1000.0);
        let traverse = Traverse::walk(
            start,
            &lines(&[
                "N 45D 00′ E;100",
                "S 45D 00′ E;100",
                "S 45D 00′ W;100",
                "N 45D 00′ W;100",
            ]),
        );
        assert_eq!(traverse.points().len(), 5);
        let gap = traverse.terminus().dist_to(start);
        assert!(gap < Distance::meters(1e-6), "square misclosed by {}", gap);
    }
}
