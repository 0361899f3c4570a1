use ad_report::{cli, config, export, insight, reader, render, viewer};
use ad_report_common::display::metric_cards;
use ad_report_common::month::available_months;
use ad_report_common::package::client_key;
use ad_report_common::{Page, ReportData};
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// 입력 파일 로드 후 제목/광고주 덮어쓰기
async fn load(input: &Path, config: &Config, title: Option<&str>, advertiser: Option<&str>) -> Result<ReportData> {
    let mut report = reader::load_report(input, &config.parse_options())
        .await
        .with_context(|| format!("{} 분석 실패", input.display()))?;
    if let Some(title) = title {
        report.rename(title);
    }
    if let Some(advertiser) = advertiser {
        report.set_advertiser(advertiser);
    }
    Ok(report)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { input, output, title, advertiser, month, page, rows_per_page } => {
            println!("📈 ad-report - 시트 분석\n");

            println!("[1/2] 파일 분석 중...");
            let report = load(&input, &config, title.as_deref(), advertiser.as_deref()).await?;
            println!("✔ {}행 추출\n", report.rows.len());

            let rows = month.filter_rows(&report.rows);
            print!("{}", render::render_summary(&report.summary));
            print!("{}", render::render_months(&available_months(&report.rows)));
            println!();
            print!("{}", render::render_cards(&metric_cards(&rows, &month)));
            println!();
            let page = Page::new(rows.len(), rows_per_page.unwrap_or(config.rows_per_page), page);
            print!("{}", render::render_table(&rows, &page));

            if let Some(output) = output {
                println!("\n[2/2] 결과 저장 중...");
                let json = serde_json::to_string_pretty(&report)?;
                std::fs::write(&output, json)?;
                println!("✔ 저장: {}", output.display());
            }

            println!("\n✅ 분석 완료");
        }

        Commands::Pdf { input, output, month, title, advertiser, font } => {
            println!("📄 ad-report - PDF 내보내기\n");

            println!("[1/2] 파일 분석 중...");
            let report = load(&input, &config, title.as_deref(), advertiser.as_deref()).await?;
            println!("✔ {}행 추출\n", report.rows.len());

            println!("[2/2] PDF 생성 중... (보기: {})", month);
            let output_path = export::output_path_for(output.as_deref(), &export::default_pdf_name(&report));
            let font_path = font.or_else(|| config.font_path.clone());
            export::pdf::generate_pdf(&report, &month, &output_path, font_path.as_deref())
                .context("PDF 생성에 실패했습니다")?;
            println!("✔ PDF 출력: {}", output_path.display());

            println!("\n✅ 내보내기 완료");
        }

        Commands::Package { input, client, output, dir, insight, insight_text, banners, title, advertiser } => {
            println!("📦 ad-report - 뷰어 패키지\n");

            println!("[1/3] 파일 분석 중...");
            let report = load(&input, &config, title.as_deref(), advertiser.as_deref()).await?;
            let key = client_key(client.as_deref().unwrap_or(&report.summary.advertiser))?;
            println!("✔ {}행 추출 (클라이언트 키: {})\n", report.rows.len(), key);

            println!("[2/3] 인사이트 준비 중...");
            let ai_insight = if let Some(text) = insight_text {
                text
            } else if insight {
                let bar = spinner("Gemini 응답 대기 중...");
                let text = insight::generate_or_fallback(&report.summary, &config).await;
                bar.finish_and_clear();
                text
            } else {
                String::new()
            };
            println!("✔ 인사이트 {}\n", if ai_insight.is_empty() { "없음" } else { "포함" });

            println!("[3/3] 패키지 작성 중...");
            let options = export::package::PackageOptions {
                client_key: key.clone(),
                ai_insight,
                banners,
            };
            let entries = export::package::package_entries(&report, &options)?;
            if let Some(dir) = dir {
                export::package::write_dir(&entries, &dir).await?;
                println!("✔ {}개 파일 출력: {}", entries.len(), dir.display());
            } else {
                let output_path = export::output_path_for(output.as_deref(), &export::package::package_file_name(&key));
                export::package::write_zip(&entries, &output_path).await?;
                println!("✔ 패키지 출력: {}", output_path.display());
            }

            println!("\n✅ 패키지 완료");
        }

        Commands::View { root, client, month, page, rows_per_page } => {
            let data = viewer::load_view(&root, &client, &month).await?;

            print!("{}", render::render_summary(&data.index.summary));
            print!("{}", render::render_months(&data.index.months));
            if !data.index.ai_insight.is_empty() {
                println!("\n🤖 AI 캠페인 진단 결과\n{}", data.index.ai_insight);
            }
            println!();

            if month.is_all() {
                let summary = &data.index.summary;
                println!("  Impressions {:>14}", ad_report_common::display::format_count(summary.total_impressions));
                println!("  Clicks      {:>14}", ad_report_common::display::format_count(summary.total_clicks));
                println!("  Efficiency  {:>14}", ad_report_common::display::format_ctr(summary.avg_ctr));
                println!("\n  월을 선택하면 일별 데이터를 볼 수 있습니다 (--month 02)");
            } else {
                print!("{}", render::render_cards(&metric_cards(&data.rows, &month)));
                println!();
                let page = Page::new(data.rows.len(), rows_per_page.unwrap_or(config.rows_per_page), page);
                print!("{}", render::render_table(&data.rows, &page));
            }
        }

        Commands::Insight { input } => {
            let report = load(&input, &config, None, None).await?;
            let bar = spinner("Gemini 응답 대기 중...");
            let result = insight::generate_insight(&report.summary, &config).await;
            bar.finish_and_clear();
            println!("{}", result?);
        }

        Commands::Config { set_api_key, set_font, set_advertiser, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API 키를 설정했습니다");
            }
            if let Some(font) = set_font {
                config.font_path = Some(font);
                config.save()?;
                println!("✔ 폰트를 설정했습니다");
            }
            if let Some(advertiser) = set_advertiser {
                config.default_advertiser = advertiser;
                config.save()?;
                println!("✔ 기본 광고주를 설정했습니다");
            }

            if show {
                println!("설정 ({}):", Config::config_path()?.display());
                println!("  모델: {}", config.model);
                println!("  타임아웃: {}초", config.timeout_seconds);
                println!("  기본 광고주: {}", config.default_advertiser);
                println!("  기본 제목: {}", config.campaign_placeholder);
                println!("  페이지당 행 수: {}", config.rows_per_page);
                println!(
                    "  폰트: {}",
                    config.font_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "내장 (Helvetica)".into())
                );
                println!("  API 키: {}", if config.get_api_key().is_ok() { "설정됨" } else { "미설정" });
            }
        }
    }

    Ok(())
}
