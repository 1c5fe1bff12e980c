//! ネイバー（Smartstore）カテゴリ推薦
//!
//! (性別, 衣類サブタイプ) → カテゴリパス

use crate::types::Gender;

const MAN: &str = "패션의류 > 남성의류";
const WOMAN: &str = "패션의류 > 여성의류";
const KIDS: &str = "출산/유아동 > 유아동의류";

/// サブタイプ → 末端カテゴリ（男性）
static MAN_CATEGORIES: &[(&str, &str)] = &[
    // トップス
    ("티셔츠", "티셔츠"), ("반팔", "티셔츠"), ("롱슬리브", "티셔츠"),
    ("셔츠", "셔츠"), ("블라우스", "셔츠"),
    ("니트", "니트/스웨터"), ("스웨터", "니트/스웨터"), ("터틀넥", "니트/스웨터"),
    ("카라티", "티셔츠"), ("폴로", "티셔츠"), ("탱크탑", "티셔츠"),
    ("후디", "맨투맨/후드"), ("맨투맨", "맨투맨/후드"),
    // ボトムス
    ("팬츠", "바지"), ("데님", "청바지"), ("슬랙스", "바지"), ("쇼츠", "반바지"),
    ("조거", "바지"), ("치노", "바지"), ("카고팬츠", "바지"), ("와이드팬츠", "바지"),
    ("부츠컷", "바지"),
    // アウター
    ("자켓", "자켓"), ("코트", "코트"), ("블레이저", "자켓"), ("점퍼", "점퍼"),
    ("패딩", "패딩"), ("가디건", "가디건"), ("베스트", "조끼"), ("야상", "자켓"),
    ("윈드브레이커", "점퍼"), ("트렌치코트", "코트"), ("라이더", "자켓"),
    ("필드자켓", "자켓"), ("사파리자켓", "자켓"),
];

/// サブタイプ → 末端カテゴリ（女性）
static WOMAN_CATEGORIES: &[(&str, &str)] = &[
    ("티셔츠", "티셔츠"), ("반팔", "티셔츠"), ("롱슬리브", "티셔츠"),
    ("셔츠", "블라우스/셔츠"), ("블라우스", "블라우스/셔츠"),
    ("니트", "니트/스웨터"), ("스웨터", "니트/스웨터"), ("터틀넥", "니트/스웨터"),
    ("카라티", "티셔츠"), ("폴로", "티셔츠"), ("탱크탑", "티셔츠"),
    ("후디", "맨투맨/후드"), ("맨투맨", "맨투맨/후드"),
    ("팬츠", "바지"), ("데님", "청바지"), ("스커트", "스커트"), ("쇼츠", "반바지"),
    ("큐롯", "바지"), ("슬랙스", "바지"), ("조거", "바지"), ("치노", "바지"),
    ("카고팬츠", "바지"), ("와이드팬츠", "바지"), ("부츠컷", "바지"),
    ("자켓", "자켓"), ("코트", "코트"), ("블레이저", "자켓"), ("점퍼", "점퍼"),
    ("패딩", "패딩"), ("가디건", "가디건"), ("베스트", "조끼"), ("야상", "자켓"),
    ("윈드브레이커", "점퍼"), ("트렌치코트", "코트"), ("라이더", "자켓"),
    ("필드자켓", "자켓"), ("사파리자켓", "자켓"),
    // ワンピース
    ("원피스", "원피스"), ("드레스", "원피스"), ("점프수트", "점프수트"),
];

/// サブタイプ → 末端カテゴリ（キッズ）
static KIDS_CATEGORIES: &[(&str, &str)] = &[
    ("티셔츠", "티셔츠"), ("셔츠", "셔츠"), ("팬츠", "바지"),
    ("자켓", "자켓"), ("코트", "코트"), ("점퍼", "점퍼"), ("패딩", "패딩"),
];

/// 直接一致しない場合の親サブタイプ
static PARENT_SUB_TYPES: &[(&str, &str)] = &[
    ("롱슬리브", "티셔츠"), ("반팔", "티셔츠"), ("카라티", "티셔츠"), ("탱크탑", "티셔츠"),
    ("스웨터", "니트"), ("터틀넥", "니트"),
    ("카고팬츠", "팬츠"), ("와이드팬츠", "팬츠"), ("부츠컷", "팬츠"), ("치노", "팬츠"), ("조거", "팬츠"),
    ("블레이저", "자켓"), ("야상", "자켓"), ("라이더", "자켓"), ("필드자켓", "자켓"), ("사파리자켓", "자켓"),
    ("윈드브레이커", "점퍼"), ("트렌치코트", "코트"),
    ("드레스", "원피스"), ("점프수트", "원피스"),
];

/// ネイバーカテゴリを推薦
///
/// 性別不明・ユニセックスは男性カテゴリとして扱う。
/// 直接一致がなければ親サブタイプで再照合し、それでもなければ `None`。
pub fn suggest_naver_category(sub_type: &str, gender: Gender) -> Option<String> {
    let (root, table) = match gender {
        Gender::Woman => (WOMAN, WOMAN_CATEGORIES),
        Gender::Kids => (KIDS, KIDS_CATEGORIES),
        Gender::Man | Gender::Unisex | Gender::Unknown => (MAN, MAN_CATEGORIES),
    };

    let leaf = find(table, sub_type).or_else(|| {
        find(PARENT_SUB_TYPES, sub_type).and_then(|parent| find(table, parent))
    })?;

    Some(format!("{} > {}", root, leaf))
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
