// End-to-end layout of a sample of the published sales dataset

use treemap_wasm::chart_layout::{ChartLayoutEngine, RenderTile, Viewport};
use treemap_wasm::renderers::render_svg_markup;
use treemap_wasm::{ChartConfig, DisplayList, SalesNode};

const SAMPLE: &str = include_str!("fixtures/video_game_sales_sample.json");

fn sample_layout() -> DisplayList {
    let data = SalesNode::from_json(SAMPLE).expect("sample dataset should parse");
    let config = ChartConfig::default();
    ChartLayoutEngine::new(&config).compute_layout(&data, Viewport::new(1280.0, 900.0))
}

fn overlap_area(a: &RenderTile, b: &RenderTile) -> f64 {
    let w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    if w > 0.0 && h > 0.0 {
        w * h
    } else {
        0.0
    }
}

#[test]
fn test_frames_subtract_padding() {
    let list = sample_layout();

    assert_eq!(list.treemap.width, 1200.0);
    assert_eq!(list.treemap.height, 700.0);
    assert_eq!((list.treemap.translate_x, list.treemap.translate_y), (40.0, 50.0));

    assert_eq!(list.legend_frame.width, 1200.0);
    assert_eq!(list.legend_frame.height, 150.0);
    assert_eq!((list.legend_frame.translate_x, list.legend_frame.translate_y), (40.0, 50.0));
}

#[test]
fn test_one_tile_per_leaf_in_sorted_order() {
    let list = sample_layout();
    assert_eq!(list.tiles.len(), 16);

    let names: Vec<&str> = list.tiles.iter().map(|t| t.name.as_str()).collect();
    // Categories by total sales, games by sales within each category
    assert_eq!(
        &names[..9],
        &[
            "Wii Sports",
            "Mario Kart Wii",
            "Wii Sports Resort",
            "Wii Play",
            "New Super Mario Bros.",
            "Nintendogs",
            "Mario Kart DS",
            "Super Mario Bros.",
            "Duck Hunt",
        ]
    );
    assert_eq!(list.tiles[15].name, "Call of Duty: Black Ops II");
    assert_eq!(list.tiles[15].category, "PS3");
}

#[test]
fn test_tiles_keep_raw_values_and_category_colors() {
    let list = sample_layout();
    let wii_sports = &list.tiles[0];
    assert_eq!(wii_sports.value, "82.53");
    assert_eq!(wii_sports.fill, "#4e79a7");

    let nsmb = list
        .tiles
        .iter()
        .find(|t| t.name == "New Super Mario Bros.")
        .unwrap();
    assert_eq!(nsmb.value, "29.80");
    assert_eq!(nsmb.fill, "#f28e2c");

    for tile in &list.tiles {
        let legend_fill = list
            .legend
            .items
            .iter()
            .find(|item| item.name == tile.category)
            .map(|item| item.fill.as_str());
        assert_eq!(legend_fill, Some(tile.fill.as_str()), "tile {}", tile.name);
    }
}

#[test]
fn test_tiles_fill_frame_without_overlap() {
    let list = sample_layout();
    let epsilon = 1e-6;

    for tile in &list.tiles {
        assert!(tile.width > 0.0 && tile.height > 0.0, "tile {} is empty", tile.name);
        assert!(tile.x >= -epsilon && tile.y >= -epsilon);
        assert!(tile.x + tile.width <= 1200.0 + epsilon);
        assert!(tile.y + tile.height <= 700.0 + epsilon);
    }

    for (i, a) in list.tiles.iter().enumerate() {
        for b in &list.tiles[i + 1..] {
            assert!(overlap_area(a, b) < epsilon, "{} overlaps {}", a.name, b.name);
        }
    }
}

#[test]
fn test_bigger_sellers_get_bigger_tiles() {
    let list = sample_layout();
    let area = |name: &str| {
        list.tiles
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.width * t.height)
            .unwrap()
    };
    assert!(area("Wii Sports") > area("Super Mario Bros."));
    assert!(area("Super Mario Bros.") > area("Tetris"));
}

#[test]
fn test_legend_in_dataset_order() {
    let list = sample_layout();
    let names: Vec<&str> = list.legend.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Wii", "DS", "X360", "PS3", "GB", "NES"]);

    let gb = &list.legend.items[4];
    assert_eq!((gb.translate_x, gb.translate_y), (120.0, 0.0));
    assert_eq!(gb.fill, "#59a14f");
}

#[test]
fn test_svg_markup_has_every_tile() {
    let list = sample_layout();
    let svg = render_svg_markup(&list);
    assert_eq!(svg.matches(r#"class="tile""#).count(), 16);
    assert_eq!(svg.matches(r#"class="legend-item""#).count(), 6);
    assert!(svg.contains(r#"data-name="Call of Duty: Modern Warfare 3""#));
    assert!(svg.contains(r#"<tspan x="5" y="50">Warfare</tspan>"#));
}

#[test]
fn test_unknown_category_gets_color_after_legend() {
    let json = r#"{"name": "root", "children": [
        {"name": "Wii", "children": [
            {"name": "Wii Sports", "category": "Wii", "value": "10"},
            {"name": "Stray", "category": "Other", "value": "5"}
        ]}
    ]}"#;
    let data = SalesNode::from_json(json).unwrap();
    let config = ChartConfig::default();
    let list = ChartLayoutEngine::new(&config).compute_layout(&data, Viewport::new(600.0, 400.0));

    let stray = list.tiles.iter().find(|t| t.name == "Stray").unwrap();
    assert_eq!(stray.fill, "#f28e2c");
    assert_eq!(list.legend.items.len(), 1);
}
