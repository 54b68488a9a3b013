//! Clothing preset-sheet facets, tables and faction presets

use crate::catalog::OptionCatalog;
use crate::facet::Facet;
use crate::text::LocalizedText;
use loom_core::{pairs, DisplayLabel, Lang, OptionPair};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClothingFacet {
    Faction,
    Role,
    Gender,
    OutfitCategory,
    Silhouette,
    Layering,
    Material,
    Palette,
    WearState,
    ViewMode,
    Pose,
    Presentation,
    AspectRatio,
    DetailAccent,
    Accessory,
    Insignia,
}

const ALL: &[ClothingFacet] = &[
    ClothingFacet::Faction,
    ClothingFacet::Role,
    ClothingFacet::Gender,
    ClothingFacet::OutfitCategory,
    ClothingFacet::Silhouette,
    ClothingFacet::Layering,
    ClothingFacet::Material,
    ClothingFacet::Palette,
    ClothingFacet::WearState,
    ClothingFacet::ViewMode,
    ClothingFacet::Pose,
    ClothingFacet::Presentation,
    ClothingFacet::AspectRatio,
    ClothingFacet::DetailAccent,
    ClothingFacet::Accessory,
    ClothingFacet::Insignia,
];

const FACTION: &[(&str, &str)] = &[
    ("Earth Orbital Defense Force", "地球轨道防卫军"),
    ("Urban Public Safety Division", "城市公安机动科"),
    ("Deep Space Resource Consortium", "深空资源联合体"),
    ("Outer Ring Colonial Authority", "外环殖民管理局"),
    ("Amagi Heavy Industries Security", "天城重工安保部"),
    ("Blue Star Relief Medical Corps", "苍星医援组织"),
    ("Academy Joint Research Unit", "学院联合科研团"),
    ("Luminous Independent Network", "流光独立派"),
    ("Independent Civilian", "独立平民"),
];

const ROLE: &[(&str, &str)] = &[
    ("pilot", "飞行员"),
    ("mechanic", "机修工"),
    ("systems engineer", "系统工程师"),
    ("security officer", "安保人员"),
    ("field medic", "现场医疗员"),
    ("navigation officer", "导航官"),
    ("comms operator", "通讯操作员"),
    ("diplomatic liaison", "外交联络官"),
    ("salvage crew", "打捞员"),
    ("research specialist", "研究员"),
    ("student", "学生"),
    ("office worker", "职员"),
    ("station clerk", "站务员"),
    ("teacher", "教师"),
    ("journalist", "记者"),
    ("cafe staff", "咖啡店店员"),
    ("logistics clerk", "物流文员"),
    ("maintenance worker", "维护工"),
    ("dock loader", "码头装卸工"),
];

const OUTFIT_CATEGORY: &[(&str, &str)] = &[
    ("flight suit", "飞行服"),
    ("tactical uniform", "战术制服"),
    ("engineering coveralls", "工程连体服"),
    ("EVA soft suit", "舱外软质作业服"),
    ("command uniform", "指挥官制服"),
    ("field research gear", "野外研究装备"),
    ("medical response kit", "医疗救援装"),
    ("cargo crew workwear", "货运工装"),
    ("corporate security kit", "企业安保制服"),
    ("civilian utility wear", "民用功能装"),
    ("school uniform", "校服"),
    ("office attire", "办公通勤装"),
    ("commuter jacket", "通勤夹克"),
    ("casual streetwear", "日常便装"),
];

const GENDER: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("Male", "男装"),
    ("Female", "女装"),
];

const SILHOUETTE: &[(&str, &str)] = &[
    ("streamlined and fitted", "贴身流线"),
    ("structured armored silhouette", "结构化护甲轮廓"),
    ("oversized layered silhouette", "宽松分层轮廓"),
    ("long coat silhouette", "长外套轮廓"),
    ("short jacket silhouette", "短夹克轮廓"),
    ("asymmetrical paneling", "不对称分割"),
    ("utilitarian harness-heavy", "多束带功能型"),
];

const LAYERING: &[(&str, &str)] = &[
    ("single-layer jumpsuit", "单层连体服"),
    ("jacket over flight suit", "飞行服外搭夹克"),
    ("armored vest over uniform", "制服外加护甲背心"),
    ("coat with inner vest", "大衣内搭背心"),
    ("modular outer shell", "模块化外壳层"),
    ("protective apron layer", "防护围裙层"),
];

const MATERIAL: &[(&str, &str)] = &[
    ("matte technical fabric", "哑光科技布"),
    ("aramid weave", "芳纶编织"),
    ("brushed composite plates", "拉丝复合板"),
    ("rubberized seals", "橡胶密封"),
    ("leather panels", "皮革拼接"),
    ("carbon fiber inserts", "碳纤维嵌片"),
    ("matte polymer shell", "哑光聚合物外壳"),
];

const PALETTE: &[(&str, &str)] = &[
    ("navy and graphite", "海军蓝与石墨灰"),
    ("charcoal and steel", "炭灰与钢色"),
    ("white and cobalt", "白与钴蓝"),
    ("olive and sand", "橄榄绿与沙色"),
    ("burnt orange and gunmetal", "焦橙与枪灰"),
    ("cream and brass", "米白与黄铜"),
    ("black and neon teal", "黑与霓虹青"),
    ("crimson and slate", "深红与板岩灰"),
];

const DETAIL_ACCENT: &[(&str, &str)] = &[
    ("rank patches", "军阶贴章"),
    ("reflective strips", "反光条"),
    ("utility pockets", "功能口袋"),
    ("zip panel seams", "拉链拼接线"),
    ("reinforced knees", "加强护膝"),
    ("pressure seals", "压力密封圈"),
    ("medical cross markings", "医疗十字标"),
    ("ID tag strips", "身份标识条"),
    ("magnetic buckles", "磁吸扣件"),
    ("piping edge trim", "包边走线"),
];

const ACCESSORY: &[(&str, &str)] = &[
    ("utility belt", "工具腰带"),
    ("tool pouch", "工具小包"),
    ("gloves", "手套"),
    ("reinforced boots", "加固靴"),
    ("helmet tucked under arm", "夹持头盔"),
    ("wrist console", "腕部终端"),
    ("respirator mask", "呼吸面罩"),
    ("radio earpiece", "无线耳机"),
];

const INSIGNIA: &[(&str, &str)] = &[
    ("chest insignia", "胸前徽记"),
    ("shoulder patches", "肩章贴片"),
    ("back emblem", "背部徽标"),
    ("armband stripe", "臂章条纹"),
    ("name tag", "姓名牌"),
];

const WEAR_STATE: &[(&str, &str)] = &[
    ("pristine and ceremonial", "整洁如新"),
    ("service-worn", "常规磨损"),
    ("battle-worn and scuffed", "战斗磨损"),
    ("dusty field use", "野外尘污"),
    ("oil-stained workwear", "油污工作服"),
];

pub const VIEW_MODE_GRID: &str = "front/back/side + 3/4 sheet (2x2 grid)";
pub const VIEW_MODE_TURNAROUND: &str = "turnaround 3-view (front/back/side)";
pub const VIEW_MODE_DETAIL_INSET: &str = "front/back + detail inset (2x2 grid)";
pub const VIEW_MODE_SINGLE_FRONT: &str = "single full-body front";

const VIEW_MODE: &[(&str, &str)] = &[
    (VIEW_MODE_GRID, "正/背/侧 + 3/4 视图（2x2 网格）"),
    (VIEW_MODE_TURNAROUND, "三视图（正/背/侧）"),
    (VIEW_MODE_DETAIL_INSET, "正背面 + 细节小图（2x2 网格）"),
    (VIEW_MODE_SINGLE_FRONT, "单一正面全身"),
];

const POSE: &[(&str, &str)] = &[
    ("neutral A-pose mannequin", "中性 A 字站姿人台"),
    ("neutral T-pose mannequin", "中性 T 字站姿人台"),
    ("relaxed neutral stance", "放松中性站姿"),
];

const PRESENTATION: &[(&str, &str)] = &[
    ("standardized mannequin (faceless, no hair)", "标准人台（无脸无发）"),
    ("faceless human body", "无脸人体"),
    ("flat lay garment layout", "平铺展示"),
];

const ASPECT_RATIO: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("1:1 square", "1:1 方形"),
    ("3:4 portrait", "3:4 竖幅"),
    ("2:3 portrait", "2:3 竖幅"),
];

/// Design guidance attached to a faction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionPreset {
    pub name: &'static str,
    pub description: LocalizedText,
    pub design_language: &'static str,
    pub palette: &'static str,
    pub materials: &'static str,
    pub insignia: &'static str,
}

impl FactionPreset {
    /// Built-in presets in display order
    pub fn all() -> Vec<FactionPreset> {
        FACTION_PRESETS
            .iter()
            .map(|raw| FactionPreset {
                name: raw.name,
                description: LocalizedText::bilingual(raw.description_en, raw.description_zh),
                design_language: raw.design_language,
                palette: raw.palette,
                materials: raw.materials,
                insignia: raw.insignia,
            })
            .collect()
    }

    pub fn find(name: &str) -> Option<FactionPreset> {
        let name = name.trim();
        Self::all().into_iter().find(|p| p.name == name)
    }

    /// The single-line guidance sentence used in the preset sheet
    pub fn guidance_line(&self) -> String {
        format!(
            "Faction design language: {}. Palette guidance: {}. Material guidance: {}. Insignia style: {}.",
            self.design_language, self.palette, self.materials, self.insignia
        )
    }
}

struct RawFaction {
    name: &'static str,
    description_en: &'static str,
    description_zh: &'static str,
    design_language: &'static str,
    palette: &'static str,
    materials: &'static str,
    insignia: &'static str,
}

const FACTION_PRESETS: &[RawFaction] = &[
    RawFaction {
        name: "Earth Orbital Defense Force",
        description_en: "Official orbital military units with disciplined uniforms and flight-ready hardware.",
        description_zh: "正式的轨道军队体系，制服严格、装备强调飞行与战备。",
        design_language: "clean military tailoring, flight-ready harnesses, reinforced seams",
        palette: "navy, graphite, muted steel, safety orange accents",
        materials: "matte technical fabric, aramid weave, composite plates",
        insignia: "orbital crest patches and rank tabs",
    },
    RawFaction {
        name: "Urban Public Safety Division",
        description_en: "City tactical response teams focused on restraint, mobility, and visibility.",
        description_zh: "城市战术维安部队，强调机动与识别。",
        design_language: "urban tactical silhouette, modular pads, reflective strips",
        palette: "charcoal, slate blue, caution yellow highlights",
        materials: "rubberized panels, matte fabric, reinforced polymer",
        insignia: "shoulder patches with city crest",
    },
    RawFaction {
        name: "Deep Space Resource Consortium",
        description_en: "Industrial crews working remote mining and salvage operations.",
        description_zh: "深空采矿与打捞的产业联合体作业人员。",
        design_language: "heavy-duty workwear, layered utility straps, rugged seams",
        palette: "burnt orange, gunmetal, dusty khaki",
        materials: "aramid weave, heavy canvas, scuffed composite plates",
        insignia: "company tags and serial stencils",
    },
    RawFaction {
        name: "Outer Ring Colonial Authority",
        description_en: "Colonial administration outfits blending survival gear with official markings.",
        description_zh: "外环殖民管理机构，兼顾生存装备与官方标识。",
        design_language: "layered outerwear, survival-ready pockets, rugged boots",
        palette: "olive, sand, weathered white",
        materials: "matte fabric, weatherproof shells, leather trims",
        insignia: "authority armbands and back emblems",
    },
    RawFaction {
        name: "Amagi Heavy Industries Security",
        description_en: "Corporate security forces with crisp silhouettes and branded hardware.",
        description_zh: "企业安保力量，强调线条克制与品牌识别。",
        design_language: "sleek corporate uniform, precise seams, restrained armor panels",
        palette: "black, steel gray, subtle teal accents",
        materials: "matte polymer shell, brushed composite plates",
        insignia: "minimalist chest logo plates",
    },
    RawFaction {
        name: "Blue Star Relief Medical Corps",
        description_en: "Emergency medical responders designed for quick identification and mobility.",
        description_zh: "紧急医疗救援组织，强调可识别与机动。",
        design_language: "clean medical silhouette, modular kits, sterile trims",
        palette: "white, cobalt blue, soft gray",
        materials: "matte fabric, sealed trims, medical-grade panels",
        insignia: "medical cross markings and armband stripes",
    },
    RawFaction {
        name: "Academy Joint Research Unit",
        description_en: "Academic field researchers balancing lab practicality and field readiness.",
        description_zh: "学院联合科研人员，兼具实验室与外勤特征。",
        design_language: "lab coat layers over field gear, instrument harnesses",
        palette: "cream, slate, brass accents",
        materials: "textured fabric, leather panels, matte polymer trims",
        insignia: "research unit badges and ID tags",
    },
    RawFaction {
        name: "Luminous Independent Network",
        description_en: "Loose independent groups with scavenged, patched, and modular attire.",
        description_zh: "松散的独立派，服装拼补、改装与模块化。",
        design_language: "patched layers, asymmetrical panels, salvaged straps",
        palette: "mixed neutrals with faded accent colors",
        materials: "weathered fabric, stitched patches, reclaimed panels",
        insignia: "hand-painted symbols and stitched tags",
    },
    RawFaction {
        name: "Independent Civilian",
        description_en: "Everyday civilians with practical, budget-conscious clothing for urban life.",
        description_zh: "日常普通人群体，面向城市生活的实用、节制服饰。",
        design_language: "simple tailoring, practical layers, subtle utility details",
        palette: "muted neutrals with small accent colors",
        materials: "cotton blends, matte fabric, worn leather trims",
        insignia: "minimal or none, occasional school or company tags",
    },
];

impl Facet for ClothingFacet {
    fn all() -> &'static [Self] {
        ALL
    }

    fn key(self) -> &'static str {
        match self {
            ClothingFacet::Faction => "factions",
            ClothingFacet::Role => "roles",
            ClothingFacet::Gender => "gender_options",
            ClothingFacet::OutfitCategory => "outfit_categories",
            ClothingFacet::Silhouette => "silhouette_options",
            ClothingFacet::Layering => "layering_options",
            ClothingFacet::Material => "material_options",
            ClothingFacet::Palette => "palette_options",
            ClothingFacet::WearState => "wear_state_options",
            ClothingFacet::ViewMode => "view_mode_options",
            ClothingFacet::Pose => "pose_options",
            ClothingFacet::Presentation => "presentation_options",
            ClothingFacet::AspectRatio => "aspect_ratio_options",
            ClothingFacet::DetailAccent => "detail_accents",
            ClothingFacet::Accessory => "accessories",
            ClothingFacet::Insignia => "insignia",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ClothingFacet::Faction => "faction",
            ClothingFacet::Role => "role",
            ClothingFacet::Gender => "gender",
            ClothingFacet::OutfitCategory => "outfit_category",
            ClothingFacet::Silhouette => "silhouette",
            ClothingFacet::Layering => "layering",
            ClothingFacet::Material => "material",
            ClothingFacet::Palette => "palette",
            ClothingFacet::WearState => "wear_state",
            ClothingFacet::ViewMode => "view_mode",
            ClothingFacet::Pose => "pose",
            ClothingFacet::Presentation => "presentation",
            ClothingFacet::AspectRatio => "aspect_ratio",
            ClothingFacet::DetailAccent => "detail_accents",
            ClothingFacet::Accessory => "accessories",
            ClothingFacet::Insignia => "insignia_placement",
        }
    }

    fn default_pairs(self) -> Vec<OptionPair> {
        let table = match self {
            ClothingFacet::Faction => FACTION,
            ClothingFacet::Role => ROLE,
            ClothingFacet::Gender => GENDER,
            ClothingFacet::OutfitCategory => OUTFIT_CATEGORY,
            ClothingFacet::Silhouette => SILHOUETTE,
            ClothingFacet::Layering => LAYERING,
            ClothingFacet::Material => MATERIAL,
            ClothingFacet::Palette => PALETTE,
            ClothingFacet::WearState => WEAR_STATE,
            ClothingFacet::ViewMode => VIEW_MODE,
            ClothingFacet::Pose => POSE,
            ClothingFacet::Presentation => PRESENTATION,
            ClothingFacet::AspectRatio => ASPECT_RATIO,
            ClothingFacet::DetailAccent => DETAIL_ACCENT,
            ClothingFacet::Accessory => ACCESSORY,
            ClothingFacet::Insignia => INSIGNIA,
        };
        pairs(table)
    }

    fn is_multi_select(self) -> bool {
        matches!(
            self,
            ClothingFacet::DetailAccent | ClothingFacet::Accessory | ClothingFacet::Insignia
        )
    }
}

impl OptionCatalog<ClothingFacet> {
    /// Faction labels paired with their localized description.
    ///
    /// Factions without a preset (added through overrides) are skipped.
    pub fn faction_descriptions(&self, lang: Lang) -> Vec<(DisplayLabel, String)> {
        let presets = FactionPreset::all();
        self.get_option_pairs(ClothingFacet::Faction)
            .iter()
            .filter_map(|pair| {
                presets
                    .iter()
                    .find(|p| p.name == pair.value.as_str())
                    .map(|p| (pair.label(lang), p.description.localize(lang)))
            })
            .collect()
    }
}
