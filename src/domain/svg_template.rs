// use宣言：必要なモジュールをスコープに取り込む

use super::brand::BrandStyle;
use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用

// --- 構造体定義 ---

/// ラスタライズの入力として利用する、検証済みのSVGマークアップコンテナ。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - マークアップが空でないこと
/// - 固有の幅と高さがどちらも 0 でないこと
#[derive(Debug, PartialEq)]
pub struct SvgDocument {
    markup: String,
    width: u32,
    height: u32,
}

// --- エラー定義 ---

/// `SvgDocument` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum SvgValidationError {
    /// マークアップ文字列が空の場合に返されるエラー。
    EmptyMarkup,
    /// 幅または高さが 0 の場合に返されるエラー。
    ZeroDimension { width: u32, height: u32 },
}

// --- 実装ブロック ---

impl SvgDocument {
    /// 新しい `SvgDocument` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `markup`: SVGマークアップ文字列。
    /// * `width`: SVGの固有幅 (px)。
    /// * `height`: SVGの固有高さ (px)。
    ///
    /// # 戻り値
    /// * `Ok(SvgDocument)`: マークアップが空でなく、寸法が正の場合。
    /// * `Err(SvgValidationError)`: 検証に失敗した場合。
    pub fn new(
        markup: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Result<Self, SvgValidationError> {
        let markup = markup.into();
        if markup.trim().is_empty() {
            return Err(SvgValidationError::EmptyMarkup);
        }
        if width == 0 || height == 0 {
            return Err(SvgValidationError::ZeroDimension { width, height });
        }
        Ok(Self {
            markup,
            width,
            height,
        })
    }

    // --- ゲッターメソッド ---

    pub fn markup(&self) -> &str {
        &self.markup
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}

// --- テンプレート関数 ---

/// ソーシャルプレビュー画像 (既定 1200×630) のSVGを組み立てます。
///
/// レイアウトは「背景 + 左端のアクセントバー + 見出し + キャッチコピー」の
/// 固定構成で、色と文言は `BrandStyle` から流し込みます。
pub fn social_card(style: &BrandStyle) -> Result<SvgDocument, SvgValidationError> {
    let w = style.social_width;
    let h = style.social_height;
    let markup = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect width="{w}" height="{h}" fill="{bg}"/>
  <rect x="0" y="0" width="24" height="{h}" fill="{accent}"/>
  <text x="96" y="300" font-family="sans-serif" font-size="88" font-weight="bold" fill="{text}">{title}</text>
  <text x="96" y="396" font-family="sans-serif" font-size="40" fill="{accent}">{tagline}</text>
</svg>
"##,
        w = w,
        h = h,
        bg = xml_escape(&style.background_color),
        accent = xml_escape(&style.accent_color),
        text = xml_escape(&style.text_color),
        title = xml_escape(&style.title),
        tagline = xml_escape(&style.tagline),
    );
    SvgDocument::new(markup, w, h)
}

/// ファビコン用の正方形SVGを組み立てます。
///
/// 角丸の地にタイトルのイニシャルを1文字置くだけの構成です。
/// 32px程度の小サイズで視認できるよう、文字はビューポートの6割の大きさにします。
pub fn favicon(style: &BrandStyle) -> Result<SvgDocument, SvgValidationError> {
    let s = style.favicon_size;
    let markup = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">
  <rect width="{s}" height="{s}" rx="{radius}" fill="{accent}"/>
  <text x="50%" y="50%" dominant-baseline="central" text-anchor="middle" font-family="sans-serif" font-size="{font_size}" font-weight="bold" fill="{bg}">{initial}</text>
</svg>
"##,
        s = s,
        radius = s / 5,
        font_size = s * 3 / 5,
        accent = xml_escape(&style.accent_color),
        bg = xml_escape(&style.background_color),
        initial = xml_escape(&style.favicon_initial()),
    );
    SvgDocument::new(markup, s, s)
}

/// XMLのマークアップ文字をエスケープします。
/// テンプレートへ流し込む文言はユーザー入力由来のため、最低限の3文字を置換します。
fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// --- トレイト実装 ---

impl fmt::Display for SvgValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgValidationError::EmptyMarkup => {
                write!(f, "SVGマークアップが空です。")
            }
            SvgValidationError::ZeroDimension { width, height } => {
                write!(
                    f,
                    "SVGの寸法が不正です: {}x{} (幅・高さとも 1 以上が必要です)",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for SvgValidationError {}

// --- テストモジュール ---
