//! Built-in font catalog
//!
//! Load-time constant set of open-source fonts the application ships with.
//! User-supplied records in the overlay override entries here by family name;
//! built-ins themselves are never mutated or deleted from storage.

use super::{Category, FontRecord};
use once_cell::sync::Lazy;

#[derive(Clone, Copy)]
struct Builtin {
    family: &'static str,
    chinese_name: Option<&'static str>,
    category: Category,
    variants: &'static [&'static str],
    subsets: &'static [&'static str],
    version: &'static str,
    last_modified: &'static str,
    license: Option<&'static str>,
    source: Option<&'static str>,
    designer: Option<&'static str>,
    description: Option<&'static str>,
}

impl Builtin {
    fn into_record(self) -> FontRecord {
        FontRecord {
            family: self.family.to_string(),
            chinese_name: self.chinese_name.map(String::from),
            category: self.category,
            variants: self.variants.iter().map(|v| v.to_string()).collect(),
            subsets: self.subsets.iter().map(|s| s.to_string()).collect(),
            version: self.version.to_string(),
            last_modified: self.last_modified.to_string(),
            license: self.license.map(String::from),
            source: self.source.map(String::from),
            designer: self.designer.map(String::from),
            copyright: None,
            description: self.description.map(String::from),
            features: None,
            scenarios: None,
        }
    }
}

static BUILTIN_CATALOG: Lazy<Vec<FontRecord>> =
    Lazy::new(|| BUILTINS.iter().map(|b| (*b).into_record()).collect());

/// The built-in catalog, in its canonical display order
pub fn builtin_fonts() -> Vec<FontRecord> {
    BUILTIN_CATALOG.clone()
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        family: "Roboto",
        chinese_name: None,
        category: Category::SansSerif,
        variants: &["100", "300", "400", "400italic", "500", "700", "700italic", "900"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v32",
        last_modified: "2024-01-01",
        license: Some("Apache-2.0"),
        source: Some("Google Fonts"),
        designer: Some("Christian Robertson"),
        description: Some("现代感十足的机械风格无衬线体，Android 系统默认字体。"),
    },
    Builtin {
        family: "Open Sans",
        chinese_name: None,
        category: Category::SansSerif,
        variants: &["300", "400", "400italic", "600", "700", "800"],
        subsets: &["latin", "latin-ext", "greek"],
        version: "v36",
        last_modified: "2023-11-14",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Steve Matteson"),
        description: Some("开放友好的人文主义无衬线体，屏显可读性极佳。"),
    },
    Builtin {
        family: "Inter",
        chinese_name: None,
        category: Category::SansSerif,
        variants: &["100", "200", "300", "400", "500", "600", "700", "800", "900"],
        subsets: &["latin", "latin-ext"],
        version: "v13",
        last_modified: "2024-03-20",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Rasmus Andersson"),
        description: Some("为屏幕界面设计的无衬线体，UI 排版的事实标准。"),
    },
    Builtin {
        family: "Montserrat",
        chinese_name: None,
        category: Category::SansSerif,
        variants: &["100", "200", "300", "400", "500", "600", "700", "800", "900"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v26",
        last_modified: "2023-08-25",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Julieta Ulanovsky"),
        description: Some("源自布宜诺斯艾利斯老城招牌的几何无衬线体。"),
    },
    Builtin {
        family: "Lato",
        chinese_name: None,
        category: Category::SansSerif,
        variants: &["100", "300", "400", "400italic", "700", "900"],
        subsets: &["latin", "latin-ext"],
        version: "v24",
        last_modified: "2023-05-02",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Łukasz Dziedzic"),
        description: Some("温暖稳重的无衬线体，细字重优雅，粗字重有力。"),
    },
    Builtin {
        family: "Playfair Display",
        chinese_name: None,
        category: Category::Serif,
        variants: &["400", "400italic", "500", "600", "700", "800", "900"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v37",
        last_modified: "2023-09-27",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Claus Eggers Sørensen"),
        description: Some("高对比度过渡衬线体，适合大号标题与刊头排印。"),
    },
    Builtin {
        family: "Merriweather",
        chinese_name: None,
        category: Category::Serif,
        variants: &["300", "400", "400italic", "700", "900"],
        subsets: &["latin", "latin-ext"],
        version: "v30",
        last_modified: "2023-06-30",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Sorkin Type"),
        description: Some("为屏幕正文阅读优化的衬线体，x 高度大，笔形结实。"),
    },
    Builtin {
        family: "Lora",
        chinese_name: None,
        category: Category::Serif,
        variants: &["400", "400italic", "500", "600", "700", "700italic"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v35",
        last_modified: "2024-02-08",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Cyreal"),
        description: Some("带书法气质的当代正文衬线体，长文阅读舒适。"),
    },
    Builtin {
        family: "Oswald",
        chinese_name: None,
        category: Category::Display,
        variants: &["200", "300", "400", "500", "600", "700"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v53",
        last_modified: "2023-03-09",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Vernon Adams"),
        description: Some("重新诠释哥特风格的窄身展示体，海报标题常客。"),
    },
    Builtin {
        family: "Pacifico",
        chinese_name: None,
        category: Category::Handwriting,
        variants: &["400"],
        subsets: &["latin", "latin-ext"],
        version: "v22",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Vernon Adams"),
        description: Some("冲浪文化气质的笔刷手写体，轻松随性。"),
    },
    Builtin {
        family: "Dancing Script",
        chinese_name: None,
        category: Category::Handwriting,
        variants: &["400", "500", "600", "700"],
        subsets: &["latin", "latin-ext"],
        version: "v25",
        last_modified: "2023-04-27",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Pablo Impallari"),
        description: Some("活泼的连笔手写体，字母随节奏起伏跳动。"),
    },
    Builtin {
        family: "Source Code Pro",
        chinese_name: None,
        category: Category::Monospace,
        variants: &["200", "300", "400", "400italic", "500", "600", "700", "900"],
        subsets: &["latin", "latin-ext"],
        version: "v23",
        last_modified: "2023-08-25",
        license: Some("OFL"),
        source: Some("Adobe Fonts"),
        designer: Some("Paul D. Hunt"),
        description: Some("Adobe 出品的编程等宽字体，易混字符经过针对性设计。"),
    },
    Builtin {
        family: "JetBrains Mono",
        chinese_name: None,
        category: Category::Monospace,
        variants: &["100", "200", "300", "400", "400italic", "500", "600", "700", "800"],
        subsets: &["latin", "latin-ext", "cyrillic"],
        version: "v18",
        last_modified: "2024-01-29",
        license: Some("OFL"),
        source: Some("JetBrains"),
        designer: Some("Philipp Nurullin"),
        description: Some("为代码阅读设计的等宽字体，加高字身并内建连字。"),
    },
    Builtin {
        family: "Noto Sans SC",
        chinese_name: Some("思源黑体"),
        category: Category::SansSerif,
        variants: &["100", "300", "400", "500", "700", "900"],
        subsets: &["latin", "chinese-simplified"],
        version: "v37",
        last_modified: "2024-02-29",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Google & Adobe"),
        description: Some("覆盖全面的泛中日韩无衬线体，简体中文界面首选。"),
    },
    Builtin {
        family: "Noto Serif SC",
        chinese_name: Some("思源宋体"),
        category: Category::Serif,
        variants: &["200", "300", "400", "500", "600", "700", "900"],
        subsets: &["latin", "chinese-simplified"],
        version: "v30",
        last_modified: "2024-02-29",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("Google & Adobe"),
        description: Some("笔画含蓄的现代宋体，正文与标题两相宜。"),
    },
    Builtin {
        family: "ZCOOL KuaiLe",
        chinese_name: Some("站酷快乐体"),
        category: Category::Display,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v19",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("ZCOOL"),
        designer: Some("刘兵克工作室"),
        description: Some("圆润俏皮的展示体，电商与儿童场景高频使用。"),
    },
    Builtin {
        family: "ZCOOL XiaoWei",
        chinese_name: Some("站酷小薇体"),
        category: Category::Serif,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v14",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("ZCOOL"),
        designer: Some("站酷"),
        description: Some("秀丽端庄的细宋风格，文艺品牌气质浓厚。"),
    },
    Builtin {
        family: "Ma Shan Zheng",
        chinese_name: Some("马善政毛笔楷书"),
        category: Category::Handwriting,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v10",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("马善政"),
        description: Some("遒劲的毛笔楷书，传统文化与节庆排版之选。"),
    },
    Builtin {
        family: "Zhi Mang Xing",
        chinese_name: Some("志莽行书"),
        category: Category::Handwriting,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v17",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("锐字家族"),
        description: Some("飞扬恣意的行书笔意，适合快节奏的动感画面。"),
    },
    Builtin {
        family: "Long Cang",
        chinese_name: Some("龙藏体"),
        category: Category::Handwriting,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v17",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("王靖鑫"),
        description: Some("清瘦灵动的硬笔手写体，带少年感的随笔气息。"),
    },
    Builtin {
        family: "Liu Jian Mao Cao",
        chinese_name: Some("流江毛草"),
        category: Category::Handwriting,
        variants: &["400"],
        subsets: &["latin", "chinese-simplified"],
        version: "v15",
        last_modified: "2022-09-22",
        license: Some("OFL"),
        source: Some("Google Fonts"),
        designer: Some("流江"),
        description: Some("狂放的草书风格，笔势连绵，个性极强。"),
    },
];
