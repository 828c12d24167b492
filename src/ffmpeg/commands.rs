use super::TranscodeJob;
use crate::config::{OUTPUT_SUFFIX, VIDEO_CODEC};
use std::path::{Path, PathBuf};

/// Build FFmpeg arguments that write one scaled PNG frame at `time` to stdout
pub fn build_preview_args(input: &Path, time: f64, size: (u32, u32)) -> Vec<String> {
    vec![
        "-v".to_string(),
        "error".to_string(),
        // -ss before -i seeks on keyframes, fast enough for scrubbing
        "-ss".to_string(),
        format!("{:.3}", time),
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-vf".to_string(),
        format!("scale={}:{}", size.0, size.1),
        "-frames:v".to_string(),
        "1".to_string(),
        "-f".to_string(),
        "image2".to_string(),
        "-c:v".to_string(),
        "png".to_string(),
        "pipe:1".to_string(),
    ]
}

/// Build FFmpeg arguments for the shrink job: trimmed, rescaled, x264
/// re-encoded video with the audio stream copied untouched.
pub fn build_transcode_args(job: &TranscodeJob) -> Vec<String> {
    let range = &job.range;
    let settings = &job.settings;

    vec![
        "-y".to_string(),
        "-ss".to_string(),
        format!("{:.3}", range.start),
        "-t".to_string(),
        format!("{:.3}", range.length()),
        "-i".to_string(),
        job.input.to_string_lossy().to_string(),
        "-map".to_string(),
        "0:v:0".to_string(),
        // Optional so clips without sound still encode
        "-map".to_string(),
        "0:a?".to_string(),
        "-vf".to_string(),
        format!("scale={}:{}", settings.width, settings.height),
        "-c:v".to_string(),
        VIDEO_CODEC.to_string(),
        "-crf".to_string(),
        settings.crf.to_string(),
        "-r".to_string(),
        settings.framerate.to_string(),
        "-c:a".to_string(),
        "copy".to_string(),
        job.output.to_string_lossy().to_string(),
    ]
}

/// `dir/clip.mp4` becomes `dir/clip_smol.mp4`
pub fn smol_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut name = format!("{}{}", stem, OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{EncodeSettings, TrimRange};

    fn arg_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(|s| s.as_str())
    }

    #[test]
    fn test_output_path_is_sibling() {
        assert_eq!(
            smol_output_path(Path::new("videos/clip.mp4")),
            PathBuf::from("videos/clip_smol.mp4")
        );
        assert_eq!(
            smol_output_path(Path::new("/tmp/a.b.mkv")),
            PathBuf::from("/tmp/a.b_smol.mkv")
        );
        assert_eq!(smol_output_path(Path::new("raw")), PathBuf::from("raw_smol"));
    }

    #[test]
    fn test_transcode_args() {
        let job = TranscodeJob::new(
            Path::new("clip.mp4"),
            TrimRange { start: 10.0, end: 40.0 },
            EncodeSettings { crf: 23, framerate: 24, width: 1280, height: 720 },
        );
        assert_eq!(job.output, PathBuf::from("clip_smol.mp4"));

        let args = build_transcode_args(&job);
        assert_eq!(args.first().map(String::as_str), Some("-y"));
        assert_eq!(arg_after(&args, "-ss"), Some("10.000"));
        assert_eq!(arg_after(&args, "-t"), Some("30.000"));
        assert_eq!(arg_after(&args, "-i"), Some("clip.mp4"));
        assert_eq!(arg_after(&args, "-vf"), Some("scale=1280:720"));
        assert_eq!(arg_after(&args, "-c:v"), Some("libx264"));
        assert_eq!(arg_after(&args, "-crf"), Some("23"));
        assert_eq!(arg_after(&args, "-r"), Some("24"));
        assert_eq!(arg_after(&args, "-c:a"), Some("copy"));
        assert_eq!(args.last().map(String::as_str), Some("clip_smol.mp4"));

        // Seek and duration apply to the input, so they come before -i.
        let input_at = args.iter().position(|a| a == "-i").unwrap();
        assert!(args.iter().position(|a| a == "-ss").unwrap() < input_at);
        assert!(args.iter().position(|a| a == "-t").unwrap() < input_at);
    }

    #[test]
    fn test_preview_args() {
        let args = build_preview_args(Path::new("clip.mp4"), 12.25, (960, 540));
        assert_eq!(arg_after(&args, "-ss"), Some("12.250"));
        assert_eq!(arg_after(&args, "-vf"), Some("scale=960:540"));
        assert_eq!(arg_after(&args, "-frames:v"), Some("1"));
        assert_eq!(arg_after(&args, "-c:v"), Some("png"));
        assert_eq!(args.last().map(String::as_str), Some("pipe:1"));
    }
}
