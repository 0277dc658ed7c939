use crate::domain::ico_file::ico_container::IcoFileError;
use crate::domain::ico_file::icon_image::IconValidationError;
use crate::domain::raster::RenderError;
use crate::domain::svg_template::SvgValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("SVGテンプレートエラー")]
    Svg(#[from] SvgValidationError),

    #[error("ラスタライズエラー")]
    Render(#[from] RenderError),

    #[error("アイコン画像の検証エラー")]
    IconValidation(#[from] IconValidationError),

    #[error("ICOコンテナエラー")]
    Ico(#[from] IcoFileError),
}
