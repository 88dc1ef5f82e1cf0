use smallvec::SmallVec;
use std::fmt;

/// Fixed size vec of cell indices, one slot per possible direction.
pub type CellIndexSmallVec = SmallVec<[usize; 8]>;
pub type DirectionSmallVec = SmallVec<[Direction; 8]>;

/// The 8 compass points. The discriminant is the position of the direction when sweeping
/// clockwise from North, so `dir as u16 * 45` is its bearing in degrees.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [Direction::North,
                                     Direction::NorthEast,
                                     Direction::East,
                                     Direction::SouthEast,
                                     Direction::South,
                                     Direction::SouthWest,
                                     Direction::West,
                                     Direction::NorthWest];

    pub const ORTHOGONAL: [Direction; 4] = [Direction::North,
                                            Direction::East,
                                            Direction::South,
                                            Direction::West];

    pub const DIAGONAL: [Direction; 4] = [Direction::NorthEast,
                                          Direction::SouthEast,
                                          Direction::SouthWest,
                                          Direction::NorthWest];

    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 4) % 8]
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        (self as usize) % 2 == 1
    }

    /// Bearing in degrees, clockwise from North.
    #[inline]
    pub fn angle(self) -> u16 {
        self as u16 * 45
    }

    /// The direction for a bearing that is a multiple of 45 degrees. Bearings of 360 degrees
    /// or more wrap around.
    pub fn from_angle(degrees: u16) -> Option<Direction> {
        if degrees % 45 == 0 {
            Some(Direction::ALL[(degrees as usize / 45) % 8])
        } else {
            None
        }
    }

    /// Split a diagonal into its (vertical, horizontal) parts.
    /// Returns None for the orthogonal directions.
    pub fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NorthEast => Some((Direction::North, Direction::East)),
            Direction::SouthEast => Some((Direction::South, Direction::East)),
            Direction::SouthWest => Some((Direction::South, Direction::West)),
            Direction::NorthWest => Some((Direction::North, Direction::West)),
            _ => None,
        }
    }

    /// (row, column) delta of a single step in this direction. Rows grow southwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Small fixed size map from a `Direction` to a cell index.
#[derive(Eq, PartialEq, Copy, Clone, Default, Hash)]
pub struct DirectionMap {
    slots: [Option<usize>; 8],
}

impl DirectionMap {
    pub fn new() -> DirectionMap {
        DirectionMap::default()
    }

    #[inline]
    pub fn get(&self, dir: Direction) -> Option<usize> {
        self.slots[dir as usize]
    }

    #[inline]
    pub fn contains(&self, dir: Direction) -> bool {
        self.slots[dir as usize].is_some()
    }

    /// Returns the previous cell index in that direction.
    #[inline]
    pub fn insert(&mut self, dir: Direction, cell: usize) -> Option<usize> {
        self.slots[dir as usize].replace(cell)
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) -> Option<usize> {
        self.slots[dir as usize].take()
    }

    pub fn clear(&mut self) {
        self.slots = [None; 8];
    }

    /// The direction in which `cell` lies, if it is in the map at all.
    pub fn direction_of(&self, cell: usize) -> Option<Direction> {
        self.iter().find(|&(_, c)| c == cell).map(|(dir, _)| dir)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// (direction, cell index) pairs in clockwise order from North.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.get(dir).map(|cell| (dir, cell)))
    }

    pub fn cells(&self) -> CellIndexSmallVec {
        self.iter().map(|(_, cell)| cell).collect()
    }

    pub fn directions(&self) -> DirectionSmallVec {
        self.iter().map(|(dir, _)| dir).collect()
    }
}

impl fmt::Debug for DirectionMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Coordinate {
        Coordinate { row, column }
    }

    /// The coordinate one step away in `dir`, or None when that would leave the grid
    /// through its north or west side. Callers check the south and east bounds.
    pub fn offset(self, dir: Direction) -> Option<Coordinate> {
        let (row_delta, column_delta) = dir.offset();
        let row = self.row as isize + row_delta;
        let column = self.column as isize + column_delta;
        if row < 0 || column < 0 {
            None
        } else {
            Some(Coordinate::new(row as usize, column as usize))
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from(row_column_pair: (usize, usize)) -> Coordinate {
        Coordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

/// A grid node. `edges` is the fixed physical adjacency, `paths` the carved subset of it.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    index: usize,
    pub(crate) edges: DirectionMap,
    pub(crate) paths: DirectionMap,
}

impl Cell {
    pub(crate) fn new(coordinate: Coordinate, index: usize) -> Cell {
        Cell {
            coordinate,
            index,
            edges: DirectionMap::new(),
            paths: DirectionMap::new(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn edges(&self) -> &DirectionMap {
        &self.edges
    }

    #[inline]
    pub fn paths(&self) -> &DirectionMap {
        &self.paths
    }

    #[inline]
    pub fn is_dead_end(&self) -> bool {
        self.paths.len() == 1
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    #[test]
    fn opposites() {
        for dir in Direction::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn angles_round_trip() {
        let angles = Direction::ALL.iter().map(|d| d.angle()).collect::<Vec<_>>();
        assert_eq!(angles, vec![0, 45, 90, 135, 180, 225, 270, 315]);
        for dir in Direction::ALL.iter() {
            assert_eq!(Direction::from_angle(dir.angle()), Some(*dir));
        }
        assert_eq!(Direction::from_angle(360), Some(Direction::North));
        assert_eq!(Direction::from_angle(10), None);
    }

    #[test]
    fn diagonal_components() {
        for dir in Direction::DIAGONAL.iter() {
            assert!(dir.is_diagonal());
            let (vertical, horizontal) = dir.components().unwrap();
            assert!(!vertical.is_diagonal() && !horizontal.is_diagonal());
            let (v_row, _) = vertical.offset();
            let (_, h_col) = horizontal.offset();
            assert_eq!(dir.offset(), (v_row, h_col));
        }
        for dir in Direction::ORTHOGONAL.iter() {
            assert!(!dir.is_diagonal());
            assert_eq!(dir.components(), None);
        }
    }

    #[test]
    fn direction_map_operations() {
        let mut map = DirectionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(Direction::South, 4), None);
        assert_eq!(map.insert(Direction::North, 1), None);
        assert_eq!(map.insert(Direction::South, 5), Some(4));
        assert_eq!(map.len(), 2);
        assert_eq!(map.direction_of(5), Some(Direction::South));
        assert_eq!(map.direction_of(4), None);
        assert_eq!(map.iter().collect_vec(),
                   vec![(Direction::North, 1), (Direction::South, 5)]);
        assert_eq!(map.remove(Direction::North), Some(1));
        assert_eq!(&*map.cells(), &[5]);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn coordinate_offsets_stop_at_north_west_sides() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.offset(Direction::North), None);
        assert_eq!(origin.offset(Direction::West), None);
        assert_eq!(origin.offset(Direction::NorthEast), None);
        assert_eq!(origin.offset(Direction::SouthEast), Some(Coordinate::new(1, 1)));
        assert_eq!(Coordinate::new(2, 3).offset(Direction::SouthWest),
                   Some(Coordinate::new(3, 2)));
    }

    #[test]
    fn coordinate_from_row_column_pair() {
        let coord: Coordinate = (4, 7).into();
        assert_eq!((coord.row, coord.column), (4, 7));
        assert_eq!(Coordinate::from((0, 1)), Coordinate::new(0, 1));
    }
}
