// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::svg_template::SvgDocument;
use image::GenericImageView; // レンダリング結果の寸法検証のために利用
use resvg::{tiny_skia, usvg};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

// --- エラー定義 ---

/// SVGのラスタライズ時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum RenderError {
    /// フォントファイルの読み込みに失敗した場合。
    FontLoad(String),
    /// SVGマークアップの解析に失敗した場合。
    SvgParse(String),
    /// ピクセルバッファの確保に失敗した場合 (寸法が 0 または巨大すぎる)。
    PixmapAllocation { width: u32, height: u32 },
    /// PNGへのエンコードに失敗した場合。
    PngEncode(String),
    /// レンダリング結果の寸法が要求と一致しなかった場合。
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

// --- 構造体定義 ---

/// SVGドキュメントをPNGへラスタライズするレンダラ。
///
/// フォントデータベースの構築が比較的重いため、1度だけ組み立てて
/// 複数のレンダリングで使い回します。
pub struct SvgRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRenderer {
    /// 新しい `SvgRenderer` インスタンスを作成します。
    ///
    /// # 引数
    /// * `font_path`: SVG内のテキスト描画に使うTTF/OTFフォントファイルのパス。
    ///   - `Some(path)`: 指定されたフォントだけを読み込みます。
    ///   - `None`: システムフォントを読み込みます。
    ///
    /// フォントが1つも見つからない環境でもレンダリング自体は失敗せず、
    /// テキスト要素が描画されないだけです (ビルドツールとして許容する挙動)。
    pub fn new(font_path: Option<&Path>) -> Result<Self, RenderError> {
        let mut fontdb = usvg::fontdb::Database::new();
        if let Some(path) = font_path {
            let font_bytes = fs::read(path)
                .map_err(|e| RenderError::FontLoad(format!("{}: {}", path.display(), e)))?;
            fontdb.load_font_data(font_bytes);
        } else {
            fontdb.load_system_fonts();
        }
        Ok(Self {
            fontdb: Arc::new(fontdb),
        })
    }

    /// SVGドキュメントを指定した寸法でレンダリングし、PNGのバイト列を返します。
    ///
    /// # 引数
    /// * `document`: レンダリング対象の検証済みSVG。
    /// * `width` / `height`: 出力PNGの寸法 (px)。SVGの固有寸法と異なる場合は
    ///   拡大縮小してレンダリングします。
    ///
    /// # 戻り値
    /// * `Ok(Vec<u8>)`: PNGエンコード済みのバイト列。デコードし直した寸法が
    ///   要求どおりであることを事後検証済み。
    /// * `Err(RenderError)`: 解析・確保・エンコードのいずれかに失敗した場合。
    pub fn render_to_png(
        &self,
        document: &SvgDocument,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        // STEP 1: マークアップを解析してレンダリングツリーを得る
        // usvg 0.44: フォントDBは Options 内の Arc<Database> として持つ
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(document.markup().as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        // STEP 2: 出力寸法のピクセルバッファを確保する
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::PixmapAllocation { width, height })?;

        // STEP 3: 固有寸法から出力寸法へのスケールを掛けてレンダリングする
        let scale_x = width as f32 / tree.size().width();
        let scale_y = height as f32 / tree.size().height();
        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // STEP 4: PNGへエンコードする
        let png_bytes = pixmap
            .encode_png()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;

        // STEP 5: 事後検証としてデコードし直し、寸法が要求どおりか確認する
        let decoded = image::load_from_memory(&png_bytes)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        if decoded.dimensions() != (width, height) {
            return Err(RenderError::SizeMismatch {
                expected: (width, height),
                actual: decoded.dimensions(),
            });
        }

        Ok(png_bytes)
    }
}

// --- トレイト実装 ---

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::FontLoad(msg) => {
                write!(f, "フォントの読み込みに失敗しました: {}", msg)
            }
            RenderError::SvgParse(msg) => {
                write!(f, "SVGの解析に失敗しました: {}", msg)
            }
            RenderError::PixmapAllocation { width, height } => {
                write!(
                    f,
                    "{}x{} のピクセルバッファを確保できませんでした。",
                    width, height
                )
            }
            RenderError::PngEncode(msg) => {
                write!(f, "PNGエンコードに失敗しました: {}", msg)
            }
            RenderError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "レンダリング結果の寸法が一致しません: 要求 {}x{}, 実際 {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;

    // --- テスト用ヘルパー関数 ---
    fn solid_red_svg(size: u32) -> SvgDocument {
        let markup = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}"><rect width="{s}" height="{s}" fill="#ff0000"/></svg>"##,
            s = size
        );
        SvgDocument::new(markup, size, size).expect("有効なSVGのはず")
    }

    /// 単色のSVGが要求どおりの寸法・色でレンダリングされることをテストします。
    #[test]
    fn renders_solid_rect_at_requested_size() {
        let renderer = SvgRenderer::new(None).unwrap();
        let png = renderer.render_to_png(&solid_red_svg(16), 16, 16).unwrap();

        let decoded = image::load_from_memory(&png).expect("PNGのデコードに失敗");
        assert_eq!(decoded.dimensions(), (16, 16));
        let pixel = decoded.to_rgba8().get_pixel(8, 8).0;
        assert_eq!(pixel, [255, 0, 0, 255]);
    }

    /// 固有寸法と異なる出力寸法を指定した場合に拡大されることをテストします。
    #[test]
    fn scales_to_non_intrinsic_size() {
        let renderer = SvgRenderer::new(None).unwrap();
        let png = renderer.render_to_png(&solid_red_svg(10), 32, 32).unwrap();

        let decoded = image::load_from_memory(&png).expect("PNGのデコードに失敗");
        assert_eq!(decoded.dimensions(), (32, 32));
    }

    #[test]
    fn broken_markup_returns_parse_error() {
        let renderer = SvgRenderer::new(None).unwrap();
        let doc = SvgDocument::new("<svg this is not xml", 10, 10).unwrap();
        let res = renderer.render_to_png(&doc, 10, 10);
        assert!(matches!(res, Err(RenderError::SvgParse(_))));
    }

    #[test]
    fn zero_target_size_returns_allocation_error() {
        let renderer = SvgRenderer::new(None).unwrap();
        let res = renderer.render_to_png(&solid_red_svg(10), 0, 10);
        assert_eq!(
            res,
            Err(RenderError::PixmapAllocation {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn missing_font_file_returns_font_error() {
        let res = SvgRenderer::new(Some(Path::new("no_such_font.ttf")));
        assert!(matches!(res, Err(RenderError::FontLoad(_))));
    }
}
