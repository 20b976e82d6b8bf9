//! Curated palettes, one per subtype, in `Subtype::ALL` order.

use crate::pipeline::types::{swatch, Palette};

pub static PALETTES: [Palette; 12] = [
    // True Winter
    Palette {
        core: &[
            swatch("True Black", "#000000"),
            swatch("Pure White", "#FFFFFF"),
            swatch("Midnight Blue", "#191970"),
            swatch("True Red", "#CC0000"),
            swatch("Royal Blue", "#4169E1"),
            swatch("Emerald Green", "#50C878"),
            swatch("Pine Green", "#01796F"),
            swatch("Bright Purple", "#6A0DAD"),
            swatch("Fuchsia", "#FF00FF"),
            swatch("Icy Pink", "#FFB6C1"),
        ],
        accent: &[
            swatch("Shocking Pink", "#FC0FC0"),
            swatch("Electric Blue", "#7DF9FF"),
            swatch("Ruby Red", "#9B111E"),
            swatch("Sapphire", "#0F52BA"),
            swatch("Hot Turquoise", "#00CED1"),
        ],
        neutral: &[
            swatch("Charcoal", "#36454F"),
            swatch("Navy", "#000080"),
            swatch("Pewter", "#8E9297"),
            swatch("Slate", "#708090"),
            swatch("Cool Taupe", "#918579"),
        ],
        luxury: &[
            swatch("Diamond", "#B9F2FF"),
            swatch("Platinum", "#E5E4E2"),
            swatch("Onyx", "#353839"),
        ],
        worst: &[
            swatch("Golden Brown", "#996515"),
            swatch("Orange", "#FFA500"),
            swatch("Mustard", "#FFDB58"),
            swatch("Warm Beige", "#F5F5DC"),
            swatch("Olive", "#808000"),
        ],
    },
    // Deep Winter
    Palette {
        core: &[
            swatch("Black", "#000000"),
            swatch("Snow White", "#FFFAFA"),
            swatch("Burgundy", "#800020"),
            swatch("Deep Emerald", "#046307"),
            swatch("Ink Blue", "#1A2B4C"),
            swatch("Blackberry", "#4D0135"),
            swatch("Cranberry", "#9F000F"),
            swatch("Deep Teal", "#00494F"),
        ],
        accent: &[
            swatch("Cobalt", "#0047AB"),
            swatch("Magenta", "#FF0090"),
            swatch("True Red", "#CC0000"),
            swatch("Amethyst", "#9966CC"),
            swatch("Pine", "#01796F"),
        ],
        neutral: &[
            swatch("Charcoal", "#36454F"),
            swatch("Dark Navy", "#02075D"),
            swatch("Espresso Black", "#1B1212"),
            swatch("Granite", "#676767"),
            swatch("Cool Taupe", "#918579"),
        ],
        luxury: &[
            swatch("Silver", "#C0C0C0"),
            swatch("Garnet", "#733635"),
            swatch("Black Pearl", "#1E272C"),
        ],
        worst: &[
            swatch("Peach", "#FFE5B4"),
            swatch("Camel", "#C19A6B"),
            swatch("Pastel Yellow", "#FDFD96"),
            swatch("Salmon", "#FA8072"),
        ],
    },
    // Bright Winter
    Palette {
        core: &[
            swatch("Pure White", "#FFFFFF"),
            swatch("Black", "#000000"),
            swatch("Hot Pink", "#FF1493"),
            swatch("Cobalt", "#0047AB"),
            swatch("Kelly Green", "#4CBB17"),
            swatch("Lemon Yellow", "#FFF700"),
            swatch("Scarlet", "#FF2400"),
            swatch("Violet", "#8F00FF"),
        ],
        accent: &[
            swatch("Electric Blue", "#7DF9FF"),
            swatch("Cyan", "#00FFFF"),
            swatch("Neon Fuchsia", "#FE4164"),
            swatch("Acid Green", "#B0BF1A"),
            swatch("Vivid Violet", "#9F00FF"),
        ],
        neutral: &[
            swatch("Charcoal", "#36454F"),
            swatch("Navy", "#000080"),
            swatch("Cool Grey", "#808080"),
            swatch("Icy Grey", "#D3D4D5"),
            swatch("Anthracite", "#383E42"),
        ],
        luxury: &[
            swatch("Platinum", "#E5E4E2"),
            swatch("Sapphire", "#0F52BA"),
            swatch("Ruby", "#E0115F"),
        ],
        worst: &[
            swatch("Dusty Rose", "#DCAE96"),
            swatch("Khaki", "#C3B091"),
            swatch("Rust", "#B7410E"),
            swatch("Muted Olive", "#8A8A5C"),
        ],
    },
    // True Summer
    Palette {
        core: &[
            swatch("Powder Blue", "#B0E0E6"),
            swatch("Lavender", "#E6E6FA"),
            swatch("Rose Pink", "#FF66CC"),
            swatch("Raspberry", "#E30B5C"),
            swatch("Periwinkle", "#CCCCFF"),
            swatch("Soft Teal", "#5F9EA0"),
            swatch("Cornflower", "#6495ED"),
            swatch("Watermelon", "#FC6C85"),
        ],
        accent: &[
            swatch("Pale Violet Red", "#DB7093"),
            swatch("Blue Bell", "#A2A2D0"),
            swatch("Sea Green", "#2E8B57"),
            swatch("Orchid", "#DA70D6"),
            swatch("Denim", "#1560BD"),
        ],
        neutral: &[
            swatch("Slate Grey", "#708090"),
            swatch("Soft White", "#F5F5F5"),
            swatch("Blue Grey", "#6699CC"),
            swatch("Cocoa Grey", "#8B8589"),
            swatch("Navy Grey", "#4B5563"),
        ],
        luxury: &[
            swatch("White Gold", "#F4F1E8"),
            swatch("Pearl", "#EAE0C8"),
            swatch("Rose Quartz", "#F7CAC9"),
        ],
        worst: &[
            swatch("Orange", "#FFA500"),
            swatch("Mustard", "#FFDB58"),
            swatch("Rust", "#B7410E"),
            swatch("Black", "#000000"),
        ],
    },
    // Light Summer
    Palette {
        core: &[
            swatch("Baby Blue", "#89CFF0"),
            swatch("Lilac", "#C8A2C8"),
            swatch("Blush Pink", "#FFB6C1"),
            swatch("Mint", "#AAF0D1"),
            swatch("Sky Blue", "#87CEEB"),
            swatch("Soft Aqua", "#B2FFFF"),
            swatch("Light Periwinkle", "#C5CBE1"),
            swatch("Powder Pink", "#FFD1DC"),
        ],
        accent: &[
            swatch("Strawberry Ice", "#F6A6B2"),
            swatch("Soft Violet", "#B39EB5"),
            swatch("Light Teal", "#8FD8D8"),
            swatch("Sweet Pea", "#E2A3C7"),
            swatch("Ice Blue", "#D6ECEF"),
        ],
        neutral: &[
            swatch("Dove Grey", "#CCCCCC"),
            swatch("Soft White", "#F5F5F5"),
            swatch("Light Taupe", "#B38B6D"),
            swatch("Pewter Blue", "#8BA8B7"),
            swatch("Silver Grey", "#AAA9AD"),
        ],
        luxury: &[
            swatch("Moonstone", "#DDE6ED"),
            swatch("Aquamarine", "#7FFFD4"),
            swatch("Silver", "#C0C0C0"),
        ],
        worst: &[
            swatch("Black", "#000000"),
            swatch("Burnt Orange", "#CC5500"),
            swatch("Chocolate", "#7B3F00"),
            swatch("Olive Drab", "#6B8E23"),
        ],
    },
    // Soft Summer
    Palette {
        core: &[
            swatch("Dusty Rose", "#DCAE96"),
            swatch("Mauve", "#E0B0FF"),
            swatch("Sage", "#9CAF88"),
            swatch("Smoky Blue", "#7393B3"),
            swatch("Soft Plum", "#8E4585"),
            swatch("Heather", "#B7A8C9"),
            swatch("Muted Teal", "#6A9C9C"),
            swatch("Antique Rose", "#C08081"),
        ],
        accent: &[
            swatch("Raspberry Mist", "#B0667E"),
            swatch("Spruce", "#5E7E7A"),
            swatch("Grey Violet", "#8C7E99"),
            swatch("Seafoam", "#93E9BE"),
            swatch("Cadet Blue", "#5F9EA0"),
        ],
        neutral: &[
            swatch("Rose Beige", "#D3B8AE"),
            swatch("Mushroom", "#BDACA3"),
            swatch("Charcoal Blue", "#3E4C59"),
            swatch("Greige", "#AFA79D"),
            swatch("Soft Navy", "#41506B"),
        ],
        luxury: &[
            swatch("Pewter", "#8E9297"),
            swatch("Smoky Quartz", "#8B7D6B"),
            swatch("Rose Gold", "#B76E79"),
        ],
        worst: &[
            swatch("Neon Yellow", "#FFFF33"),
            swatch("Bright Orange", "#FF7F00"),
            swatch("Pure Black", "#000000"),
            swatch("Hot Red", "#FF0000"),
        ],
    },
    // True Autumn
    Palette {
        core: &[
            swatch("Rust", "#B7410E"),
            swatch("Olive", "#808000"),
            swatch("Goldenrod", "#DAA520"),
            swatch("Pumpkin", "#FF7518"),
            swatch("Moss Green", "#8A9A5B"),
            swatch("Terracotta", "#E2725B"),
            swatch("Teal", "#008080"),
            swatch("Tomato Red", "#FF6347"),
        ],
        accent: &[
            swatch("Burnt Orange", "#CC5500"),
            swatch("Mustard", "#FFDB58"),
            swatch("Brick Red", "#CB4154"),
            swatch("Jade", "#00A86B"),
            swatch("Copper", "#B87333"),
        ],
        neutral: &[
            swatch("Camel", "#C19A6B"),
            swatch("Chocolate", "#7B3F00"),
            swatch("Cream", "#FFFDD0"),
            swatch("Khaki", "#C3B091"),
            swatch("Coffee", "#6F4E37"),
        ],
        luxury: &[
            swatch("Gold", "#FFD700"),
            swatch("Amber", "#FFBF00"),
            swatch("Tiger's Eye", "#E08D3C"),
        ],
        worst: &[
            swatch("Icy Blue", "#F0FFFF"),
            swatch("Fuchsia", "#FF00FF"),
            swatch("Cool Grey", "#808080"),
            swatch("Pure White", "#FFFFFF"),
        ],
    },
    // Deep Autumn
    Palette {
        core: &[
            swatch("Dark Chocolate", "#3D2B1F"),
            swatch("Espresso", "#4B3621"),
            swatch("Tomato Red", "#FF6347"),
            swatch("Rust", "#8B4513"),
            swatch("Aubergine", "#3B0910"),
            swatch("Forest Green", "#228B22"),
            swatch("Olive Drab", "#6B8E23"),
            swatch("Mahogany", "#C04000"),
            swatch("Burnt Orange", "#CC5500"),
            swatch("Deep Teal", "#014421"),
        ],
        accent: &[
            swatch("Terracotta", "#E2725B"),
            swatch("Pumpkin", "#FF7518"),
            swatch("Bronze", "#CD7F32"),
            swatch("Turquoise", "#40E0D0"),
            swatch("Maroon", "#800000"),
        ],
        neutral: &[
            swatch("Cream", "#FFFDD0"),
            swatch("Camel", "#C19A6B"),
            swatch("Coffee", "#6F4E37"),
            swatch("Olive Grey", "#85856B"),
            swatch("Black Brown", "#2B1D0E"),
        ],
        luxury: &[
            swatch("Antique Brass", "#C88A65"),
            swatch("Amber", "#FFBF00"),
            swatch("Garnet", "#733635"),
        ],
        worst: &[
            swatch("Hot Pink", "#FF69B4"),
            swatch("Icy Blue", "#F0FFFF"),
            swatch("Lavender", "#E6E6FA"),
            swatch("Cool Grey", "#808080"),
            swatch("Neon Green", "#39FF14"),
        ],
    },
    // Soft Autumn
    Palette {
        core: &[
            swatch("Soft Olive", "#A3A380"),
            swatch("Salmon", "#FA8072"),
            swatch("Warm Sage", "#B2AC88"),
            swatch("Camel", "#C19A6B"),
            swatch("Dusty Teal", "#4C9085"),
            swatch("Muted Coral", "#E59E8A"),
            swatch("Sandstone", "#786D5F"),
            swatch("Soft Rust", "#B86D4B"),
        ],
        accent: &[
            swatch("Mustard Seed", "#C5A03F"),
            swatch("Cinnamon", "#D2691E"),
            swatch("Moss", "#8A9A5B"),
            swatch("Warm Rose", "#C97C7C"),
            swatch("Peacock Mist", "#5E8C8A"),
        ],
        neutral: &[
            swatch("Oatmeal", "#E3D9C6"),
            swatch("Mushroom", "#BDACA3"),
            swatch("Taupe", "#8B8589"),
            swatch("Warm Grey", "#808069"),
            swatch("Milk Chocolate", "#84563C"),
        ],
        luxury: &[
            swatch("Antique Gold", "#CFB53B"),
            swatch("Jade", "#00A86B"),
            swatch("Smoky Topaz", "#933D41"),
        ],
        worst: &[
            swatch("Black", "#000000"),
            swatch("Electric Blue", "#7DF9FF"),
            swatch("Magenta", "#FF0090"),
            swatch("Pure White", "#FFFFFF"),
        ],
    },
    // True Spring
    Palette {
        core: &[
            swatch("Coral", "#FF7F50"),
            swatch("Golden Yellow", "#FFD700"),
            swatch("Turquoise", "#40E0D0"),
            swatch("Kelly Green", "#4CBB17"),
            swatch("Warm Aqua", "#5ACBBA"),
            swatch("Poppy Red", "#E35335"),
            swatch("Apricot", "#FBCEB1"),
            swatch("Clear Teal", "#00A5A5"),
        ],
        accent: &[
            swatch("Sunflower", "#FFDA03"),
            swatch("Tangerine", "#F28500"),
            swatch("Lime", "#32CD32"),
            swatch("Bright Periwinkle", "#7B89E0"),
            swatch("Watermelon", "#FC6C85"),
        ],
        neutral: &[
            swatch("Cornsilk", "#FFF8DC"),
            swatch("Warm Ivory", "#FFFFF0"),
            swatch("Sandy Brown", "#F4A460"),
            swatch("Light Camel", "#D8B384"),
            swatch("Golden Brown", "#996515"),
        ],
        luxury: &[
            swatch("Yellow Gold", "#FFD700"),
            swatch("Rose Gold", "#B76E79"),
            swatch("Coral Stone", "#F88379"),
        ],
        worst: &[
            swatch("Black", "#000000"),
            swatch("Burgundy", "#800020"),
            swatch("Cool Grey", "#808080"),
            swatch("Icy Lilac", "#E2D8F0"),
        ],
    },
    // Light Spring
    Palette {
        core: &[
            swatch("Peach", "#FFE5B4"),
            swatch("Light Coral", "#F08080"),
            swatch("Buttercup", "#F9E17F"),
            swatch("Aqua", "#7FFFD4"),
            swatch("Pale Green", "#98FB98"),
            swatch("Warm Pink", "#FFA6C9"),
            swatch("Light Turquoise", "#AFEEEE"),
            swatch("Periwinkle", "#CCCCFF"),
        ],
        accent: &[
            swatch("Melon", "#FDBCB4"),
            swatch("Spring Green", "#00FF7F"),
            swatch("Honey", "#EBA937"),
            swatch("Light Violet", "#B19CD9"),
            swatch("Clear Salmon", "#FF8C69"),
        ],
        neutral: &[
            swatch("Ivory", "#FFFFF0"),
            swatch("Light Camel", "#D8B384"),
            swatch("Warm Beige", "#F5F5DC"),
            swatch("Stone", "#C2B280"),
            swatch("Soft Golden Grey", "#BDB29A"),
        ],
        luxury: &[
            swatch("Champagne", "#F7E7CE"),
            swatch("Opal", "#A8C3BC"),
            swatch("Light Gold", "#FDDC5C"),
        ],
        worst: &[
            swatch("Black", "#000000"),
            swatch("Charcoal", "#36454F"),
            swatch("Burgundy", "#800020"),
            swatch("Dark Brown", "#654321"),
        ],
    },
    // Bright Spring
    Palette {
        core: &[
            swatch("Bright Coral", "#FF4040"),
            swatch("Hot Turquoise", "#00CED1"),
            swatch("Sunshine Yellow", "#FFFD37"),
            swatch("Parrot Green", "#12AD2B"),
            swatch("Warm Fuchsia", "#FF4F79"),
            swatch("Clear Orange", "#FF8C00"),
            swatch("Royal Purple", "#7851A9"),
            swatch("Bright Navy", "#1F3A93"),
        ],
        accent: &[
            swatch("Lime Punch", "#C0D725"),
            swatch("Tropical Aqua", "#1CE3C8"),
            swatch("Poppy", "#E35335"),
            swatch("Flamingo", "#FC8EAC"),
            swatch("Azure", "#007FFF"),
        ],
        neutral: &[
            swatch("Warm White", "#FDF6E3"),
            swatch("Navy", "#000080"),
            swatch("Chocolate", "#7B3F00"),
            swatch("Light Warm Grey", "#C8C2B4"),
            swatch("Camel", "#C19A6B"),
        ],
        luxury: &[
            swatch("Bright Gold", "#FFCC00"),
            swatch("Topaz", "#FFC87C"),
            swatch("Emerald", "#50C878"),
        ],
        worst: &[
            swatch("Dusty Mauve", "#915F6D"),
            swatch("Muted Olive", "#8A8A5C"),
            swatch("Greige", "#AFA79D"),
            swatch("Smoky Blue", "#7393B3"),
        ],
    },
];

/// Universally wearable neutrals, used when neither subtype nor season is known.
pub static DEFAULT_PALETTE: Palette = Palette {
    core: &[
        swatch("Navy", "#000080"),
        swatch("Soft White", "#F5F5F5"),
        swatch("Teal", "#008080"),
        swatch("Soft Raspberry", "#B0667E"),
        swatch("Medium Grey", "#8C8C8C"),
        swatch("Jade", "#00A86B"),
    ],
    accent: &[
        swatch("Eggplant", "#614051"),
        swatch("Turquoise", "#40E0D0"),
        swatch("Warm Red", "#C8102E"),
    ],
    neutral: &[
        swatch("Charcoal", "#36454F"),
        swatch("Taupe", "#8B8589"),
        swatch("Stone", "#C2B280"),
    ],
    luxury: &[swatch("Pewter", "#8E9297"), swatch("Pearl", "#EAE0C8")],
    worst: &[
        swatch("Neon Yellow", "#FFFF33"),
        swatch("Neon Green", "#39FF14"),
    ],
};
