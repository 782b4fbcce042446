// src/page.rs
use crate::chains::Chain;
use crate::supply::ChainSupply;
use crate::utils::escape_html;

pub struct PageView<'a> {
    pub title: &'a str,
    pub supplies: &'a [ChainSupply],
    pub offered_chains: &'a [Chain],
}

// Replaces each `??` once the browser has mounted and /api/supply answers.
const HYDRATE_SCRIPT: &str = r#"<script>
fetch("/api/supply")
  .then((res) => res.json())
  .then((supplies) => {
    for (const s of supplies) {
      const el = document.querySelector(`#supply-${s.chain_id} .value`);
      if (el) el.textContent = s.display;
    }
  })
  .catch(() => {});
</script>"#;

pub fn render_page(page: &PageView<'_>) -> String {
    let title = escape_html(page.title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n<main class=\"min-h-screen flex flex-col\">\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));

    for supply in page.supplies {
        html.push_str(&supply_line(supply));
    }

    html.push_str("<ul class=\"networks\">\n");
    for chain in page.offered_chains {
        html.push_str(&format!(
            "<li data-chain-id=\"{}\">{}</li>\n",
            chain.id,
            escape_html(chain.name)
        ));
    }
    html.push_str("</ul>\n</main>\n");
    html.push_str(HYDRATE_SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

fn supply_line(supply: &ChainSupply) -> String {
    format!(
        "<p id=\"supply-{}\"><span class=\"value\">{}</span> {}</p>\n",
        supply.chain_id,
        escape_html(&supply.display),
        escape_html(&supply.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{MAINNET, target_chains};
    use crate::supply::ReadStatus;
    use ethers::types::Address;

    fn supply(chain_id: u64, label: &str, display: &str) -> ChainSupply {
        ChainSupply {
            chain_id,
            chain_name: "x".into(),
            label: label.into(),
            token: Address::zero(),
            status: ReadStatus::Success,
            raw: None,
            display: display.into(),
        }
    }

    #[test]
    fn renders_lines_and_networks() {
        let supplies = vec![
            supply(1, "POP on Mainnet", "??"),
            supply(137, "POP on Polygon", "1.2M"),
        ];
        let chains = target_chains(5);
        let html = render_page(&PageView {
            title: "POP Supply",
            supplies: &supplies,
            offered_chains: &chains,
        });

        assert!(html.contains("<title>POP Supply</title>"));
        assert!(html.contains("<h1>POP Supply</h1>"));
        assert!(html.contains(
            "<p id=\"supply-1\"><span class=\"value\">??</span> POP on Mainnet</p>"
        ));
        assert!(html.contains(
            "<p id=\"supply-137\"><span class=\"value\">1.2M</span> POP on Polygon</p>"
        ));
        assert!(html.contains("<li data-chain-id=\"1\">Ethereum</li>"));
        assert!(html.contains("<li data-chain-id=\"5\">Goerli</li>"));
        assert!(html.contains("fetch(\"/api/supply\")"));
    }

    #[test]
    fn escapes_text() {
        let supplies = vec![supply(1, "<b>", "??")];
        let html = render_page(&PageView {
            title: "A & B",
            supplies: &supplies,
            offered_chains: &[MAINNET],
        });
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("</span> &lt;b&gt;</p>"));
    }
}
