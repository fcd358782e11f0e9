// patterns.rs - Built-in seed glyphs and the glyph mini-language

use crate::grid::Field;

// Glyph mini-language: '*' is a live cell, space is a dead cell, newline
// starts the next row. Tabs only align the literals below and are stripped
// before parsing, so every row can be indented to line up in the source.

pub const BLOCK: &str = "**
		**";

pub const BLINKER: &str = "***";

pub const TOAD: &str = " ***
		*** ";

pub const BEEHIVE: &str = " ** 
		*  *
		 ** ";

pub const LOAF: &str = " ** 
		*  *
		 * *
		  * ";

pub const BOAT: &str = "** 
		* *
		 * ";

pub const PENTADECATHLON: &str = " * 
		 * 
		* *
		 * 
		 * 
		 * 
		 * 
		* *
		 * 
		 * ";

pub const GLIDER: &str = "*  
		 **
		** ";

pub const LWSS: &str = "*  * 
		    *
		*   *
		 ****";

pub const INFINITE_GROWTH_1: &str = "      * 
		    * **
		    * * 
		    *   
		  *     
		* *     ";

pub const INFINITE_GROWTH_2: &str = "*** *
		*    
		   **
		 ** *
		* * *";

pub const INFINITE_GROWTH_3: &str = "******** *****   ***      ******* *****";

pub const R_PENTOMINO: &str = " **
		** 
		 * ";

/// A named seed glyph.
pub struct Pattern {
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern { name: "Block", glyph: BLOCK },
    Pattern { name: "Blinker", glyph: BLINKER },
    Pattern { name: "Toad", glyph: TOAD },
    Pattern { name: "Beehive", glyph: BEEHIVE },
    Pattern { name: "Loaf", glyph: LOAF },
    Pattern { name: "Boat", glyph: BOAT },
    Pattern { name: "Pentadecathlon", glyph: PENTADECATHLON },
    Pattern { name: "Glider", glyph: GLIDER },
    Pattern { name: "Lightweight spaceship", glyph: LWSS },
    Pattern { name: "Infinite growth 1", glyph: INFINITE_GROWTH_1 },
    Pattern { name: "Infinite growth 2", glyph: INFINITE_GROWTH_2 },
    Pattern { name: "Infinite growth 3", glyph: INFINITE_GROWTH_3 },
    Pattern { name: "R-pentomino", glyph: R_PENTOMINO },
];

/// Parses a glyph into relative live-cell offsets anchored at (0, 0).
///
/// Tabs are stripped first. The width of the first line (plus its newline)
/// left-aligns every later line against line one's start column; '*' emits
/// an offset, a newline advances the row, anything else is inert.
pub fn parse(glyph: &str) -> Vec<(i32, i32)> {
    let stripped: String = glyph.chars().filter(|&c| c != '\t').collect();
    let mut offsets = Vec::new();
    let mut line = 0;
    let mut line_width = 0;
    for (i, c) in stripped.chars().enumerate() {
        let i = i as i32;
        match c {
            '*' => offsets.push((i - line_width * line, line)),
            '\n' => {
                line += 1;
                if line_width == 0 {
                    line_width = i + 1;
                }
            }
            _ => {}
        }
    }
    offsets
}

/// Marks every offset alive at `(x0 + dx, y0 + dy)`, both axes wrapped.
/// Placement cannot fail; origins outside the field wrap around silently.
pub fn place(field: &mut Field, offsets: &[(i32, i32)], x0: i32, y0: i32) {
    for &(dx, dy) in offsets {
        field.set_alive(x0 + dx, y0 + dy);
    }
}

/// Seeds a glyph at the given origin. The start-up entry point.
pub fn create_pattern(field: &mut Field, glyph: &str, x0: i32, y0: i32) {
    place(field, &parse(glyph), x0, y0);
}
