//! Reaction emoji catalog: QQ face ids the gateway accepts, with the names shown to the model.

/// Fixed catalog in prompt order. Ids are QQ face ids.
pub const EMOJI_CATALOG: &[(i64, &str)] = &[
    (76, "点赞"),
    (307, "喵喵"),
    (285, "摸鱼"),
    (66, "爱心"),
    (147, "棒棒糖"),
    (424, "狂按按钮"),
    (49, "抱抱"),
    (38, "木槌敲头"),
    (277, "狗头"),
    (265, "辣眼睛"),
    (390, "头秃"),
    (63, "玫瑰"),
    (212, "托腮"),
    (5, "大哭"),
    (9, "委屈"),
    (350, "贴贴"),
    (175, "卖萌"),
    (344, "大怨种"),
    (187, "鬼魂"),
    (144, "礼花"),
    (146, "爆筋"),
    (311, "打call"),
    (59, "便便"),
    (46, "猪头"),
    (37, "骷髅头"),
    (317, "菜狗"),
    (124, "OK"),
];

/// Name for a catalog id; `None` when the id is not in the catalog.
pub fn emoji_name(id: i64) -> Option<&'static str> {
    EMOJI_CATALOG
        .iter()
        .find(|(emoji_id, _)| *emoji_id == id)
        .map(|(_, name)| *name)
}

/// Catalog rendered for the prompt: `"76:点赞, 307:喵喵, ..."`.
pub fn catalog_prompt() -> String {
    prompt::format_emoji_catalog(EMOJI_CATALOG.iter().map(|(id, name)| (*id, *name)))
}
