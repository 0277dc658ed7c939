// ブランドアセット生成に使う配色・文言・出力サイズを型で表現する

/// ブランドアセットの見た目を決める設定構造体。
///
/// 以前はモジュールレベルの定数として散らばっていた値を1つの構造体にまとめ、
/// 生成処理へ明示的に渡す設計にしています。配色を変えるときに
/// パッキング処理側のコードへ触れる必要がなくなります。
#[derive(Debug, Clone, PartialEq)]
pub struct BrandStyle {
    /// サイト名など、ソーシャルカードの主見出しに使う文字列。
    pub title: String,
    /// 主見出しの下に添えるキャッチコピー。
    pub tagline: String,
    /// 背景色 (CSSカラー表記)。
    pub background_color: String,
    /// アクセントバーやファビコンの地に使う色。
    pub accent_color: String,
    /// 文字色。
    pub text_color: String,
    /// ソーシャルプレビュー画像の幅 (px)。
    pub social_width: u32,
    /// ソーシャルプレビュー画像の高さ (px)。
    pub social_height: u32,
    /// ファビコンの一辺 (px)。ICOの1バイト寸法表現に収まる値にすること。
    pub favicon_size: u32,
}

impl Default for BrandStyle {
    fn default() -> Self {
        Self {
            title: "brand_asset_gen".to_string(),
            tagline: "ビルド時にブランドアセットを生成するツール".to_string(),
            background_color: "#0f172a".to_string(),
            accent_color: "#38bdf8".to_string(),
            text_color: "#f8fafc".to_string(),
            social_width: 1200,
            social_height: 630,
            favicon_size: 32,
        }
    }
}

impl BrandStyle {
    /// ファビコンの中央に描くイニシャル (タイトルの先頭1文字) を返します。
    /// タイトルが空の場合は空文字列を返します。
    pub fn favicon_initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_og_image_dimensions() {
        let style = BrandStyle::default();
        assert_eq!(style.social_width, 1200);
        assert_eq!(style.social_height, 630);
        assert_eq!(style.favicon_size, 32);
    }

    #[test]
    fn favicon_initial_is_uppercased_first_char() {
        let style = BrandStyle {
            title: "brand".to_string(),
            ..BrandStyle::default()
        };
        assert_eq!(style.favicon_initial(), "B");
    }

    #[test]
    fn favicon_initial_of_empty_title_is_empty() {
        let style = BrandStyle {
            title: String::new(),
            ..BrandStyle::default()
        };
        assert_eq!(style.favicon_initial(), "");
    }
}
